//! Result types for extraction output.
//!
//! Records are created fresh on every call and owned by the caller. Empty
//! `author`/`timestamp` strings mean "unresolved", never a real value.

use serde::{Deserialize, Serialize};

/// One post extracted from one feed container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Synthetic identifier, `container_post_<index>`. Stable only within
    /// one pass over the same container sequence.
    pub id: String,

    /// Trimmed primary text. Never empty.
    pub text: String,

    /// Trimmed author display name; empty when unresolved.
    pub author: String,

    /// Raw timestamp token (ISO datetime, title tooltip or visible label);
    /// empty when unresolved.
    pub timestamp: String,

    /// Document location at extraction time.
    pub url: String,

    /// Provenance tag of the strategy that produced the record.
    pub selector: String,
}

impl PostRecord {
    /// Record id for the container at `index`.
    #[must_use]
    pub fn container_id(index: usize) -> String {
        format!("container_post_{index}")
    }

    /// Whether the author was resolved.
    #[must_use]
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }

    /// Whether the timestamp was resolved.
    #[must_use]
    pub fn has_timestamp(&self) -> bool {
        !self.timestamp.is_empty()
    }
}

/// A post that survived the cleaning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanPost {
    /// `clean_post_<n>`, numbered from 1 in output order.
    pub id: String,

    /// Id of the raw record this post came from.
    pub original_id: String,

    /// Whitespace-normalized text.
    pub text: String,

    /// Author, possibly recovered through the text-anchored lookup.
    pub author: String,

    /// Raw timestamp token, or the processing time when none was found.
    pub timestamp: String,

    /// `true` when `timestamp` is the processing time rather than a value
    /// read from the markup.
    pub timestamp_inferred: bool,

    /// Heuristic content confidence in `0.0..=1.0`.
    pub confidence: f64,

    /// Position of the raw record in the input sequence.
    pub original_index: usize,
}
