//! Text Classifier
//!
//! Decides whether a candidate string taken from a primary text span is post
//! copy or noise that happens to share the same styling. Rules run in a fixed
//! order and the first one that fires rejects.

use crate::options::MIN_POST_TEXT_CHARS;
use crate::patterns::{ACTION_LABEL, RELATIVE_TIMESTAMP, TRANSLATION_MARKERS};

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// At or below the minimum length.
    TooShort,
    /// Part of a machine-translation banner.
    TranslationBanner,
    /// A relative timestamp such as "2h ago".
    RelativeTimestamp,
    /// An action button label such as "Share".
    ActionLabel,
}

/// Outcome of classifying one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Accepted,
    Rejected(Rejection),
}

impl Classification {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == Classification::Accepted
    }
}

/// Classify `candidate` using the default length floor.
///
/// # Example
///
/// ```rust
/// use rs_feedpost::classifier::{classify, Classification, Rejection};
///
/// assert_eq!(classify("Just had a great lunch!!"), Classification::Accepted);
/// assert_eq!(classify("Share"), Classification::Rejected(Rejection::TooShort));
/// ```
#[must_use]
pub fn classify(candidate: &str) -> Classification {
    classify_with_floor(candidate, MIN_POST_TEXT_CHARS)
}

/// Classify `candidate`, rejecting anything of `min_chars` characters or fewer.
///
/// Length is counted in characters, not bytes, so non-Latin posts are held to
/// the same floor.
#[must_use]
pub fn classify_with_floor(candidate: &str, min_chars: usize) -> Classification {
    let rejection = if candidate.chars().count() <= min_chars {
        Some(Rejection::TooShort)
    } else if TRANSLATION_MARKERS.iter().any(|m| candidate.contains(m)) {
        Some(Rejection::TranslationBanner)
    } else if RELATIVE_TIMESTAMP.is_match(candidate) {
        Some(Rejection::RelativeTimestamp)
    } else if ACTION_LABEL.is_match(candidate) {
        Some(Rejection::ActionLabel)
    } else {
        None
    };

    rejection.map_or(Classification::Accepted, Classification::Rejected)
}

/// Shorthand for `classify(candidate).is_accepted()`.
#[must_use]
pub fn is_post_text(candidate: &str) -> bool {
    classify(candidate).is_accepted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_at_and_below_floor() {
        assert_eq!(classify(""), Classification::Rejected(Rejection::TooShort));
        assert_eq!(classify("0123456789"), Classification::Rejected(Rejection::TooShort));
        assert!(classify("0123456789a").is_accepted());
    }

    #[test]
    fn floor_counts_characters_not_bytes() {
        // Eleven characters, thirty-three bytes.
        let cjk = "今天天气很好我们去公园";
        assert_eq!(cjk.chars().count(), 11);
        assert!(classify(cjk).is_accepted());
        assert!(!classify("今天天气很好我们去公").is_accepted());
    }

    #[test]
    fn rejects_translation_banners_regardless_of_length() {
        let long = "Some very long text. See translation of the full post here";
        assert_eq!(
            classify(long),
            Classification::Rejected(Rejection::TranslationBanner)
        );
        assert!(!is_post_text("Translated from Indonesian by the feed"));
        assert!(!is_post_text("Original text: Halo semua, apa kabar?"));
    }

    #[test]
    fn rejects_relative_timestamps_when_floor_allows_them_through() {
        assert_eq!(
            classify_with_floor("12h ago", 0),
            Classification::Rejected(Rejection::RelativeTimestamp)
        );
        assert_eq!(
            classify_with_floor("3D LALU", 0),
            Classification::Rejected(Rejection::RelativeTimestamp)
        );
        assert_eq!(
            classify_with_floor("1234567890123m ago", 10),
            Classification::Rejected(Rejection::RelativeTimestamp)
        );
    }

    #[test]
    fn rejects_action_labels_when_floor_allows_them_through() {
        for label in ["Like", "comment", "SHARE", "Follow", "more"] {
            assert_eq!(
                classify_with_floor(label, 0),
                Classification::Rejected(Rejection::ActionLabel),
                "{label}"
            );
        }
        assert!(classify_with_floor("Liked it", 0).is_accepted());
    }

    #[test]
    fn first_matching_rule_wins() {
        // Short and a timestamp: length is checked first.
        assert_eq!(classify("2h ago"), Classification::Rejected(Rejection::TooShort));
    }

    #[test]
    fn accepts_ordinary_post_text() {
        assert!(is_post_text("Just had a great lunch!!"));
        assert!(is_post_text("Follow the river down to the old mill"));
    }
}
