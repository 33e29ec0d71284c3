//! Timestamp Resolver
//!
//! Reads the first time-semantic element of a container through an ordered
//! fallback: machine-readable `datetime`, then the `title` tooltip, then the
//! visible label.

use dom_query::Selection;

use crate::dom;
use crate::selector::{self, markers};

/// Which part of the time marker produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    Datetime,
    Title,
    Text,
}

/// A timestamp token together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    /// Raw token, not parsed or normalized.
    pub value: String,
    pub source: TimestampSource,
}

/// Resolve the timestamp of `container`.
///
/// Returns `None` when the container has no `<time>`/`<abbr>` descendant, or
/// when the first one carries neither attribute nor text. Empty attributes
/// count as absent.
#[must_use]
pub fn resolve_timestamp(container: &Selection) -> Option<ResolvedTimestamp> {
    let marker = selector::query(container, markers::is_time_marker)?;

    if let Some(value) = dom::non_empty_attribute(&marker, "datetime") {
        return Some(ResolvedTimestamp { value, source: TimestampSource::Datetime });
    }
    if let Some(value) = dom::non_empty_attribute(&marker, "title") {
        return Some(ResolvedTimestamp { value, source: TimestampSource::Title });
    }

    let text = dom::text_content(&marker);
    (!text.is_empty()).then(|| ResolvedTimestamp {
        value: text.to_string(),
        source: TimestampSource::Text,
    })
}

/// Timestamp value of `container`, empty when unresolved.
#[must_use]
pub fn extract_timestamp(container: &Selection) -> String {
    resolve_timestamp(container).map(|ts| ts.value).unwrap_or_default()
}
