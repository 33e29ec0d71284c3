//! DOM Operations Adapter
//!
//! Thin presence-checked wrappers over `dom_query`. Every lookup that can miss
//! returns `Option`, so callers decide explicitly how an absent element or
//! attribute degrades.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating an empty value as absent.
///
/// Markup generators routinely emit `title=""`; for fallback chains that is
/// the same as no attribute at all.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name).filter(|value| !value.is_empty())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Whether the first node of the selection is an element.
///
/// The document node reached by walking past `<html>` is not.
#[inline]
#[must_use]
pub fn is_element(sel: &Selection) -> bool {
    sel.nodes().first().is_some_and(dom_query::NodeRef::is_element)
}

/// Whether the element matches a CSS selector.
#[inline]
#[must_use]
pub fn matches(sel: &Selection, selector: &str) -> bool {
    is_element(sel) && sel.is(selector)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Trimmed text content, `None` when it is empty.
#[must_use]
pub fn non_empty_text(sel: &Selection) -> Option<String> {
    Some(trimmed_text(sel)).filter(|text| !text.is_empty())
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Parent element, `None` at the top of the element tree.
#[must_use]
pub fn parent_element<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    let parent = parent(sel);
    is_element(&parent).then_some(parent)
}

/// Nearest element, starting with `sel` itself, that matches `selector`.
#[must_use]
pub fn closest<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let mut current = is_element(sel).then(|| sel.clone());

    while let Some(node) = current {
        if node.is(selector) {
            return Some(node);
        }
        current = parent_element(&node);
    }

    None
}

// === Querying ===

/// First descendant matching a CSS selector, if any.
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    found.exists().then_some(found)
}

/// All descendants matching a CSS selector, in document order.
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_attributes() {
        let doc = parse(r#"<div id="main" title="">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(get_attribute(&div, "title"), Some(String::new()));
        assert_eq!(non_empty_attribute(&div, "title"), None);
        assert_eq!(get_attribute(&div, "data-test"), None);
    }

    #[test]
    fn test_trimmed_and_non_empty_text() {
        let doc = parse("<p>  padded  </p><span>   </span>");

        assert_eq!(trimmed_text(&doc.select("p")), "padded");
        assert_eq!(non_empty_text(&doc.select("p")), Some("padded".to_string()));
        assert_eq!(non_empty_text(&doc.select("span")), None);
    }

    #[test]
    fn test_closest_includes_self() {
        let doc = parse(r#"<div class="m"><span class="m" id="inner">x</span></div>"#);
        let span = doc.select("#inner");

        let found = closest(&span, ".m");
        assert_eq!(found.as_ref().and_then(tag_name), Some("span".to_string()));
    }

    #[test]
    fn test_closest_walks_ancestors() {
        let doc = parse(
            r#"<section data-mcomponent="MContainer"><div><p><span id="t">x</span></p></div></section>"#,
        );
        let span = doc.select("#t");

        let found = closest(&span, r#"[data-mcomponent="MContainer"]"#);
        assert_eq!(found.as_ref().and_then(tag_name), Some("section".to_string()));
        assert!(closest(&span, ".missing").is_none());
    }

    #[test]
    fn test_parent_element_stops_at_root() {
        let doc = parse("<html><body><p>x</p></body></html>");
        let html = doc.select("html");

        assert!(parent_element(&doc.select("p")).is_some());
        assert!(parent_element(&html).is_none());
    }

    #[test]
    fn test_query_selector_absent_is_none() {
        let doc = parse(r#"<div id="c"><p class="a">First</p><p class="a">Second</p></div>"#);
        let container = doc.select("#c");

        let first = query_selector(&container, "p.a");
        assert_eq!(first.as_ref().map(trimmed_text), Some("First".to_string()));
        assert!(query_selector(&container, "time").is_none());
        assert_eq!(query_selector_all(&container, "p.a").len(), 2);
        assert!(query_selector_all(&container, "abbr").is_empty());
    }

    #[test]
    fn test_matches_requires_element() {
        let doc = parse(r#"<span class="f2 a" role="link">x</span>"#);
        let span = doc.select("span");
        let empty = doc.select("time");

        assert!(matches(&span, r#"span.f2.a[role="link"]"#));
        assert!(!matches(&empty, "time"));
    }
}
