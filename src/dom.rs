//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the parsers one vocabulary
//! for tag names, class tokens, attributes, inline styles and text.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Class tokens of the first node, in document order.
#[must_use]
pub fn class_list(sel: &Selection) -> Vec<String> {
    sel.attr("class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Whether the first node carries `class` as a whole token.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Value of one property in the inline `style` attribute.
///
/// Property names compare case-insensitively; `background-color` does not
/// match `color`. Empty values count as absent.
#[must_use]
pub fn inline_style(sel: &Selection, property: &str) -> Option<String> {
    let style = sel.attr("style")?;
    style.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        let value = value.trim();
        (name.trim().eq_ignore_ascii_case(property) && !value.is_empty()).then(|| value.to_string())
    })
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Trimmed text content as an owned string.
#[inline]
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// First node of a selection.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}

/// Last node of a selection.
#[must_use]
pub fn last<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().last().map(|node| Selection::from(*node))
}

/// First descendant element carrying `class`, in document order.
///
/// Subtrees rooted at an element carrying `boundary` are not entered, so a
/// lookup on an outer block never picks up a match owned by a nested one.
#[must_use]
pub fn descendant_with_class<'a>(
    sel: &Selection<'a>,
    class: &str,
    boundary: &str,
) -> Option<Selection<'a>> {
    sel.nodes()
        .first()
        .and_then(|node| find_within(node, class, boundary))
}

fn find_within<'a>(node: &NodeRef<'a>, class: &str, boundary: &str) -> Option<Selection<'a>> {
    for child in node.children().into_iter().filter(|child| child.is_element()) {
        let el = Selection::from(child);
        if has_class(&el, class) {
            return Some(el);
        }
        if has_class(&el, boundary) {
            continue;
        }
        if let Some(found) = find_within(&child, class, boundary) {
            return Some(found);
        }
    }
    None
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
