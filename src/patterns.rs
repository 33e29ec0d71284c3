//! Compiled regex patterns for text classification and cleaning.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by the stage of the pipeline that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Classifier Patterns
// =============================================================================

/// Relative timestamp labels rendered where post copy is expected: "2h",
/// "15m ago", "3d lalu", or a bare unit letter.
pub static RELATIVE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d*[hmd](\s+(ago|lalu))?$").expect("RELATIVE_TIMESTAMP regex")
});

/// Action button labels that share the primary text styling.
pub static ACTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Like|Comment|Share|Follow|More)$").expect("ACTION_LABEL regex")
});

/// Substrings marking machine-translation banners.
pub const TRANSLATION_MARKERS: &[&str] = &["Translated from", "See translation", "Original text"];

// =============================================================================
// Cleaning Pass Noise Patterns
// =============================================================================

const NOISE_SOURCES: &[&str] = &[
    // UI elements
    r"(?i)^(Like|Comment|Share|Follow|More)$",
    r"(?i)^\d+[KM]?\s*(Comments?|Like|Share|Follow)$",
    r"(?i)^(People You May Know|Suggested for you|See all)$",
    r"(?i)^\d+\s*mutual friends?$",
    r"(?i)^(Add Friend|Remove|Block|Report)$",
    r"(?i)^(What's on your mind\?|Photo|Video|Live)$",
    r"(?i)^(Home|Search|Notifications|Menu|Profile)$",
    r"(?i)^(News Feed|Stories|Groups|Pages|Events)$",
    // Reaction glyphs from the private-use icon font
    r"^(\x{F0378}|\x{F0379}|\x{F037A}|\x{F078B})",
    // Emoji-only
    r"^[\x{1F300}-\x{1F6FF}]+$",
    // Counters
    r"^\d+$",
    r"^\d+[KM]$",
    // Media glyphs
    r"^(\x{F160B}|\x{1F3A5}|\x{1F4F7}|\x{1F4F8}|\x{1F3B5})",
    // Timestamps and metadata
    r"^\d+[hmdHMD]$",
    r"(?i)^(Just now|Yesterday|Today)$",
    r"(?i)^(Sponsored|Promoted|Advertisement)$",
    r"(?i)^(Privacy|Public|Friends|Custom)$",
    // Translation metadata
    r"(?i)^Translated from \w+$",
    r"(?i)^See translation$",
    r"(?i)^Original text$",
    // Short filler
    r"^\.{3,}$",
    r"^\x{2026}+$",
    r"^\s*$",
];

/// UI and metadata strings that are never post content.
///
/// Any match (unanchored search, though most patterns anchor themselves)
/// marks the text as noise.
pub static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NOISE_SOURCES
        .iter()
        .map(|source| Regex::new(source).expect("NOISE_PATTERNS regex"))
        .collect()
});

// =============================================================================
// Content Identification Patterns
// =============================================================================

/// Two words of three or more letters.
pub static CONTENT_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z]{3,}.*[a-zA-Z]{3,}").expect("CONTENT_WORDS regex")
});

/// Sentence-ending punctuation.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("SENTENCE_END regex"));

/// Clause punctuation.
pub static CLAUSE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,:;]").expect("CLAUSE_PUNCTUATION regex"));

/// Patterns of which at least one must match for text to look like a post.
pub static CONTENT_PATTERNS: LazyLock<[&'static Regex; 3]> =
    LazyLock::new(|| [&*CONTENT_WORDS, &*SENTENCE_END, &*CLAUSE_PUNCTUATION]);

/// Splits text into sentences.
pub static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_SPLIT regex"));

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Zero-width spaces, joiners and the byte order mark.
pub static ZERO_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{200B}-\x{200D}\x{FEFF}]").expect("ZERO_WIDTH regex")
});
