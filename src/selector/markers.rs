//! Feed Markup Markers
//!
//! The mobile feed renders through a component framework that tags blocks
//! with `data-mcomponent` roles and styles them with short, reused class
//! names (`f1`, `f2`, `a`, `m`). None of it is a contract; it is the input
//! schema as observed, collected here so a markup change touches one file.

use dom_query::Selection;

use crate::dom;

// ============================================================
// CSS MARKERS
// ============================================================

/// A feed item: one post and its chrome.
pub const FEED_CONTAINER: &str = r#"[data-mcomponent="MContainer"]"#;

/// Generic item wrapper, used when no feed container encloses a text span.
pub const ITEM_WRAPPER: &str = ".m";

/// Framework block intended to hold rich text.
pub const TEXT_AREA: &str = r#"[data-mcomponent="TextArea"]"#;

/// Styling of the main body copy of a post.
pub const PRIMARY_TEXT_SPAN: &str = "span.f1";

/// The clickable author name: secondary styling, link role, focusable.
pub const AUTHOR_LINK: &str = r#"span.f2.a[role="link"][data-focusable="true"]"#;

/// Author candidates inside a known container, in no particular precedence.
pub const CONTAINER_AUTHOR: &str = "span.f2.a, h3 a, h4 a";

/// Elements carrying time semantics.
pub const TIME_MARKER: &str = "time, abbr";

/// Provenance tag written into every record produced by the container
/// extractor.
pub const CONTAINER_PROVENANCE: &str = "MContainer[role-button-child]";

// ============================================================
// RULES
// ============================================================

/// Feed item container.
#[must_use]
pub fn is_feed_container(sel: &Selection) -> bool {
    dom::matches(sel, FEED_CONTAINER)
}

/// Text-area role block.
#[must_use]
pub fn is_text_area(sel: &Selection) -> bool {
    dom::matches(sel, TEXT_AREA)
}

/// Primary body text span.
#[must_use]
pub fn is_primary_text_span(sel: &Selection) -> bool {
    dom::matches(sel, PRIMARY_TEXT_SPAN)
}

/// Fully qualified author link used by the text-anchored lookup.
#[must_use]
pub fn is_author_link(sel: &Selection) -> bool {
    dom::matches(sel, AUTHOR_LINK)
}

/// Any of the looser author patterns accepted inside a container.
///
/// Heading anchors match through any `h3`/`h4` ancestor, the same way a
/// descendant combinator does.
#[must_use]
pub fn is_container_author(sel: &Selection) -> bool {
    dom::matches(sel, CONTAINER_AUTHOR)
}

/// `<time>` or `<abbr>`.
#[must_use]
pub fn is_time_marker(sel: &Selection) -> bool {
    dom::matches(sel, TIME_MARKER)
}
