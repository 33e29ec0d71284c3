//! Cleaning Pass
//!
//! A second, stricter filter over the raw records of one extraction pass:
//! drops UI noise the classifier lets through, keeps only text that reads
//! like prose, normalizes whitespace, suppresses repeats within the pass and
//! recovers missing authors with the document-wide lookup.

use std::collections::HashSet;

use chrono::Utc;
use dom_query::Document;
use tracing::{debug, info};

use crate::author;
use crate::container::preview;
use crate::options::MIN_AUTHOR_CHARS;
use crate::patterns::{
    CONTENT_PATTERNS, NOISE_PATTERNS, SENTENCE_END, SENTENCE_SPLIT, WHITESPACE_NORMALIZE,
    ZERO_WIDTH,
};
use crate::result::{CleanPost, PostRecord};
use crate::Options;

/// Whether `text` is UI chrome or metadata rather than post content.
#[must_use]
pub fn is_noise_content(text: &str, options: &Options) -> bool {
    let text = text.trim();

    if text.chars().count() < options.min_noise_chars {
        return true;
    }

    NOISE_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Whether `text` looks like prose: long enough, with words or punctuation.
#[must_use]
pub fn is_real_post_content(text: &str, options: &Options) -> bool {
    let text = text.trim();

    if text.chars().count() < options.min_content_chars {
        return false;
    }

    CONTENT_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Collapse whitespace runs and strip zero-width characters.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(text.trim(), " ");
    ZERO_WIDTH.replace_all(&collapsed, "").trim().to_string()
}

/// Heuristic confidence that `text` is a genuine post, in `0.0..=1.0`.
///
/// Scored in whole tenths so bucket thresholds compare exactly.
#[must_use]
pub fn calculate_confidence(text: &str) -> f64 {
    let len = text.chars().count();
    let mut tenths: u8 = 0;

    if len > 50 {
        tenths += 3;
    }
    if len > 100 {
        tenths += 2;
    }
    if SENTENCE_END.is_match(text) {
        tenths += 2;
    }

    let sentences = SENTENCE_SPLIT
        .split(text)
        .filter(|s| s.trim().chars().count() > 5)
        .count();
    if sentences > 1 {
        tenths += 2;
    }

    if CONTENT_PATTERNS.iter().any(|pattern| pattern.is_match(text)) {
        tenths += 1;
    }

    f64::from(tenths.min(10)) / 10.0
}

/// Clean the raw records of one pass over `doc`.
///
/// Records are processed in order. Output ids are renumbered from
/// `clean_post_1`; `original_id`/`original_index` point back at the input.
#[must_use]
pub fn clean_posts(doc: &Document, raw_posts: &[PostRecord], options: &Options) -> Vec<CleanPost> {
    let mut cleaned: Vec<CleanPost> = Vec::new();
    let mut seen_texts = HashSet::new();

    for (index, post) in raw_posts.iter().enumerate() {
        if is_noise_content(&post.text, options) {
            debug!(text = %preview(&post.text, 50), "skipped noise");
            continue;
        }
        if !is_real_post_content(&post.text, options) {
            debug!(text = %preview(&post.text, 50), "skipped non-content");
            continue;
        }

        let text = clean_text(&post.text);
        if !seen_texts.insert(text.to_lowercase()) {
            debug!(text = %preview(&text, 50), "skipped duplicate");
            continue;
        }

        let mut author = post.author.trim().to_string();
        if options.enhance_authors && author.chars().count() < MIN_AUTHOR_CHARS {
            // The span text is the trimmed original, not the normalized copy.
            // An unresolved lookup clears the placeholder.
            author = author::resolve_author_by_text(doc, &post.text, options.max_author_depth)
                .unwrap_or_default();
        }
        if options.require_author && author.is_empty() {
            debug!(text = %preview(&text, 50), "skipped no author");
            continue;
        }

        let (timestamp, timestamp_inferred) = if post.timestamp.is_empty() {
            (Utc::now().to_rfc3339(), true)
        } else {
            (post.timestamp.clone(), false)
        };

        let clean = CleanPost {
            id: format!("clean_post_{}", cleaned.len() + 1),
            original_id: post.id.clone(),
            confidence: calculate_confidence(&text),
            text,
            author,
            timestamp,
            timestamp_inferred,
            original_index: index,
        };
        debug!(
            id = %clean.id,
            author = %clean.author,
            confidence = clean.confidence,
            "added clean post"
        );
        cleaned.push(clean);
    }

    info!(
        cleaned = cleaned.len(),
        raw = raw_posts.len(),
        "cleaning pass finished"
    );
    cleaned
}
