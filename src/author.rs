//! Author Resolver
//!
//! Two entry points share one goal, naming whoever wrote a piece of content:
//!
//! - **Text-anchored**: the post text is known but no container handle is.
//!   Every primary text span whose text equals it is located document-wide,
//!   then a bounded ancestor walk looks for the author link.
//! - **Container-scoped**: the container is already correctly scoped, so a
//!   plain descendant search suffices.

use dom_query::{Document, Selection};
use tracing::trace;

use crate::dom;
use crate::options::MAX_AUTHOR_ANCESTOR_DEPTH;
use crate::selector::{self, markers};

// ============================================================
// TEXT-ANCHORED VARIANT
// ============================================================

/// Find the author of `content_text` anywhere in `doc`, searching at most
/// `max_depth` ancestor levels above each match's container.
///
/// Candidates are primary text spans whose trimmed text equals
/// `content_text` exactly. Each candidate starts at its closest feed
/// container, or the closest item wrapper when there is none; candidates
/// without either are skipped. The first author link found wins, even if its
/// text is empty, in which case `Some("")` is returned.
///
/// Returns `None` when every candidate is exhausted.
#[must_use]
pub fn resolve_author_by_text(doc: &Document, content_text: &str, max_depth: usize) -> Option<String> {
    let spans = doc.select(markers::PRIMARY_TEXT_SPAN);

    for node in spans.nodes() {
        let span = Selection::from(*node);
        if dom::trimmed_text(&span) != content_text {
            continue;
        }

        let start = dom::closest(&span, markers::FEED_CONTAINER)
            .or_else(|| dom::closest(&span, markers::ITEM_WRAPPER));
        let Some(start) = start else {
            trace!("matching text span has no enclosing container");
            continue;
        };

        if let Some(author) = author_within_ancestors(&start, max_depth) {
            return Some(author);
        }
    }

    None
}

/// Search `start` and up to `max_depth - 1` of its ancestors for an author
/// link.
fn author_within_ancestors(start: &Selection, max_depth: usize) -> Option<String> {
    let mut current = Some(start.clone());

    for level in 0..max_depth {
        let node = current?;
        if let Some(link) = selector::query(&node, markers::is_author_link) {
            trace!(level, "author link found");
            return Some(dom::trimmed_text(&link));
        }
        current = dom::parent_element(&node);
    }

    None
}

/// Author of `content_text` in `doc`, or an empty string when unresolved.
///
/// This scans the whole document. Prefer
/// [`extract_container_author`] when a container handle is at hand.
#[must_use]
pub fn extract_author_for_post(doc: &Document, content_text: &str) -> String {
    resolve_author_by_text(doc, content_text, MAX_AUTHOR_ANCESTOR_DEPTH).unwrap_or_default()
}

// ============================================================
// CONTAINER-SCOPED VARIANT
// ============================================================

/// First author candidate inside `container`, in document order, whose
/// trimmed text is non-empty.
///
/// Styled spans and heading anchors have equal standing; whichever comes
/// first in the document wins.
#[must_use]
pub fn resolve_container_author(container: &Selection) -> Option<String> {
    selector::query_all(container, markers::is_container_author)
        .iter()
        .find_map(dom::non_empty_text)
}

/// Container-scoped author, or an empty string when unresolved.
#[must_use]
pub fn extract_container_author(container: &Selection) -> String {
    resolve_container_author(container).unwrap_or_default()
}
