//! Configuration options for post extraction and cleaning.
//!
//! The `Options` struct carries the empirically tuned tolerances of the
//! heuristics so they can be adjusted without touching traversal logic.

/// Candidate post text with this many characters or fewer is rejected.
///
/// Short strings in the feed are almost always UI labels ("Like", "2h",
/// "See more") rather than post copy.
pub const MIN_POST_TEXT_CHARS: usize = 10;

/// Number of ancestor levels, starting container included, searched for an
/// author marker by the text-anchored author lookup.
///
/// Author markup sits at a roughly fixed depth above the post body. Going
/// further up starts crossing into neighbouring posts.
pub const MAX_AUTHOR_ANCESTOR_DEPTH: usize = 5;

/// Text shorter than this is treated as noise by the cleaning pass.
pub const MIN_NOISE_CHARS: usize = 10;

/// Text shorter than this is never considered real post content by the
/// cleaning pass.
pub const MIN_CONTENT_CHARS: usize = 15;

/// Authors shorter than this are re-resolved through the text-anchored lookup
/// during cleaning.
pub const MIN_AUTHOR_CHARS: usize = 2;

/// Configuration options for extraction behavior.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_feedpost::Options;
///
/// let options = Options {
///     require_author: false,
///     ..Options::default()
/// };
/// assert_eq!(options.max_author_depth, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Candidate text of this many characters or fewer is rejected by the
    /// text classifier.
    ///
    /// Default: [`MIN_POST_TEXT_CHARS`]
    pub min_text_chars: usize,

    /// Ancestor levels searched by the text-anchored author lookup.
    ///
    /// Default: [`MAX_AUTHOR_ANCESTOR_DEPTH`]
    pub max_author_depth: usize,

    /// Minimum length for the cleaning pass noise filter.
    ///
    /// Default: [`MIN_NOISE_CHARS`]
    pub min_noise_chars: usize,

    /// Minimum length for text to count as real post content when cleaning.
    ///
    /// Default: [`MIN_CONTENT_CHARS`]
    pub min_content_chars: usize,

    /// Re-resolve missing or one-letter authors with the document-wide
    /// text-anchored lookup during cleaning.
    ///
    /// Default: `true`
    pub enhance_authors: bool,

    /// Drop cleaned posts whose author is still unresolved.
    ///
    /// Default: `true`
    pub require_author: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_text_chars: MIN_POST_TEXT_CHARS,
            max_author_depth: MAX_AUTHOR_ANCESTOR_DEPTH,
            min_noise_chars: MIN_NOISE_CHARS,
            min_content_chars: MIN_CONTENT_CHARS,
            enhance_authors: true,
            require_author: true,
        }
    }
}
