//! Selector Infrastructure
//!
//! Rules are plain predicates over a `Selection`. The feed markup offers no
//! stable identifiers, so every marker the engine relies on is named once in
//! [`markers`] and matched through these helpers.

use dom_query::Selection;

pub mod markers;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for first descendant matching the rule
///
/// Iterates through all descendants of `root` in document order and returns
/// the first element for which the rule returns true. `root` itself is not
/// tested.
///
/// # Example
///
/// ```rust
/// use rs_feedpost::selector::{self, markers};
/// use rs_feedpost::dom;
///
/// let doc = dom::parse(r#"<div><time datetime="2024-01-01">Jan 1</time></div>"#);
/// let root = doc.select("div");
///
/// let result = selector::query(&root, markers::is_time_marker);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Query for all descendants matching the rule, in document order
///
/// # Example
///
/// ```rust
/// use rs_feedpost::selector::{self, markers};
/// use rs_feedpost::dom;
///
/// let doc = dom::parse(r#"<div>
///     <div data-mcomponent="TextArea">a</div>
///     <div data-mcomponent="TextArea">b</div>
/// </div>"#);
/// let root = doc.select("div");
///
/// let results = selector::query_all(&root, markers::is_text_area);
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}
