//! Container Post Extractor
//!
//! Turns one feed container into at most one [`PostRecord`]. The container's
//! text areas are scanned in document order and the first primary text span
//! the classifier accepts becomes the post text; author and timestamp are then
//! resolved inside the same container.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use tracing::{debug, info, trace};

use crate::author;
use crate::classifier::{self, Classification};
use crate::dom;
use crate::result::PostRecord;
use crate::selector::{self, markers};
use crate::timestamp;
use crate::Options;

/// Extract the post held by `container`.
///
/// `index` is the container's position in the caller's enumeration and
/// becomes part of the record id; `location` is the document's current URL.
///
/// Returns `None` when the container has no text area, or when no text area
/// offers a primary text span the classifier accepts. Missing author or time
/// markers only leave the corresponding field empty.
///
/// # Example
///
/// ```rust
/// use rs_feedpost::{dom, extract_container_post_data};
///
/// let doc = dom::parse(r#"
///     <div data-mcomponent="MContainer">
///         <h3><a>Jane Doe</a></h3>
///         <div data-mcomponent="TextArea"><span class="f1">Just had a great lunch!!</span></div>
///     </div>"#);
/// let container = doc.select(r#"[data-mcomponent="MContainer"]"#);
///
/// let post = extract_container_post_data(&container, 0, "https://m.example.com/").unwrap();
/// assert_eq!(post.author, "Jane Doe");
/// assert_eq!(post.timestamp, "");
/// ```
#[must_use]
pub fn extract_container_post_data(
    container: &Selection,
    index: usize,
    location: &str,
) -> Option<PostRecord> {
    extract_container_post_with_options(container, index, location, &Options::default())
}

/// [`extract_container_post_data`] with a custom classifier floor.
#[must_use]
pub fn extract_container_post_with_options(
    container: &Selection,
    index: usize,
    location: &str,
    options: &Options,
) -> Option<PostRecord> {
    let text = find_post_text(container, options.min_text_chars)?;

    Some(PostRecord {
        id: PostRecord::container_id(index),
        text,
        author: author::extract_container_author(container),
        timestamp: timestamp::extract_timestamp(container),
        url: location.to_string(),
        selector: markers::CONTAINER_PROVENANCE.to_string(),
    })
}

/// First accepted primary text in the container's text areas.
///
/// Only the first primary span of each text area is considered; the scan
/// stops at the first acceptance.
fn find_post_text(container: &Selection, min_chars: usize) -> Option<String> {
    let text_areas = selector::query_all(container, markers::is_text_area);
    if text_areas.is_empty() {
        trace!("container has no text areas");
        return None;
    }

    for text_area in &text_areas {
        let Some(span) = selector::query(text_area, markers::is_primary_text_span) else {
            continue;
        };
        let candidate = dom::trimmed_text(&span);

        match classifier::classify_with_floor(&candidate, min_chars) {
            Classification::Accepted => return Some(candidate),
            Classification::Rejected(reason) => {
                trace!(?reason, candidate = %candidate, "primary text rejected");
            }
        }
    }

    None
}

/// Key identifying a container within one pass: its `id` attribute, or its
/// position when it has none or it is empty.
fn container_key(container: &Selection, index: usize) -> String {
    dom::non_empty_attribute(container, "id").unwrap_or_else(|| format!("container_{index}"))
}

/// Run the container extractor over every feed container of `doc`.
///
/// Containers are visited in document order and indexed by position.
/// A container whose `id` repeats one already visited in this pass is
/// skipped.
#[must_use]
pub fn extract_posts(doc: &Document, location: &str, options: &Options) -> Vec<PostRecord> {
    let containers = doc.select(markers::FEED_CONTAINER);
    let total = containers.length();
    debug!(total, "feed containers found");

    let mut seen = HashSet::new();
    let mut posts = Vec::new();

    for (index, node) in containers.nodes().iter().enumerate() {
        let container = Selection::from(*node);
        if !seen.insert(container_key(&container, index)) {
            trace!(index, "container already processed");
            continue;
        }

        if let Some(post) = extract_container_post_with_options(&container, index, location, options) {
            debug!(
                index,
                author = %post.author,
                text = %preview(&post.text, 50),
                "extracted post from container"
            );
            posts.push(post);
        }
    }

    info!(posts = posts.len(), containers = total, "container extraction finished");
    posts
}

/// First `max_chars` characters of `text`, for log lines.
pub(crate) fn preview(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(end, _)| &text[..end])
}
