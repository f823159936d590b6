//! Typed DOM helpers over kuchikikiki.
//!
//! The patches never touch raw attribute strings: class lists, child elements and tag names all
//! go through [`NodeExt`]. Node handles are reference counted, so every query here collects into a
//! `Vec` before the caller starts detaching or appending nodes.

use crate::error::{PatchError, PatchResult};
use kuchikikiki::iter::NodeIterator;
use kuchikikiki::traits::TendrilSink;
use kuchikikiki::{Attribute, ElementData, ExpandedName, NodeRef};

/// Parse a complete HTML document.
///
/// Missing `<html>`, `<head>` and `<body>` are synthesised, as in a browser.
#[must_use]
pub fn parse_html(html: &str) -> NodeRef {
    kuchikikiki::parse_html().one(html)
}

/// Serialise a document (or any subtree) back to HTML.
#[must_use]
pub fn serialize(node: &NodeRef) -> String {
    node.to_string()
}

/// All elements under `root` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`PatchError::Selector`] if the selector does not parse.
pub fn select_all(root: &NodeRef, selector: &str) -> PatchResult<Vec<NodeRef>> {
    let matches = root
        .select(selector)
        .map_err(|()| PatchError::Selector(selector.to_string()))?;
    Ok(matches.map(|m| m.as_node().clone()).collect())
}

/// Build a detached element such as `<div class="dropdown-divider"></div>`.
///
/// The new element takes its namespace from `like`, an element of the document it will join.
#[must_use]
pub fn new_element(like: &ElementData, tag: &str, classes: &[&str]) -> NodeRef {
    let mut name = like.name.clone();
    name.prefix = None;
    name.local = tag.into();
    let class = (!classes.is_empty()).then(|| {
        (
            ExpandedName::new("", "class"),
            Attribute {
                prefix: None,
                value: classes.join(" "),
            },
        )
    });
    NodeRef::new_element(name, class)
}

/// Class-list and structure operations on a DOM node.
pub trait NodeExt {
    /// Local tag name, or `None` for text, comments and the document node.
    fn tag_name(&self) -> Option<String>;
    /// Classes in attribute order, without duplicates.
    fn classes(&self) -> Vec<String>;
    /// Whether the element carries `class`.
    fn has_class(&self, class: &str) -> bool;
    /// Whether the element carries any of `classes`.
    fn has_any_class(&self, classes: &[&str]) -> bool {
        classes.iter().any(|c| self.has_class(c))
    }
    /// Add each class that is not already present.
    fn add_classes(&self, classes: &[&str]);
    /// Remove each class that is present. An emptied `class` attribute is dropped.
    fn remove_classes(&self, classes: &[&str]);
    /// Direct element children, skipping text and comments.
    fn element_children(&self) -> Vec<NodeRef>;
    /// Direct element children with the given tag name.
    fn children_named(&self, tag: &str) -> Vec<NodeRef>;
    /// Detach every child node (elements and text) and return them in order.
    fn take_children(&self) -> Vec<NodeRef>;
}

impl NodeExt for NodeRef {
    fn tag_name(&self) -> Option<String> {
        self.as_element()
            .map(|element| element.name.local.to_string())
    }

    fn classes(&self) -> Vec<String> {
        let Some(element) = self.as_element() else {
            return Vec::new();
        };
        let attributes = element.attributes.borrow();
        let mut classes: Vec<String> = Vec::new();
        for class in attributes.get("class").unwrap_or_default().split_whitespace() {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
        classes
    }

    fn has_class(&self, class: &str) -> bool {
        self.as_element().is_some_and(|element| {
            element
                .attributes
                .borrow()
                .get("class")
                .is_some_and(|value| value.split_whitespace().any(|c| c == class))
        })
    }

    fn add_classes(&self, classes: &[&str]) {
        let Some(element) = self.as_element() else {
            return;
        };
        let mut current = self.classes();
        let before = current.len();
        for class in classes {
            if !current.iter().any(|c| c == class) {
                current.push((*class).to_string());
            }
        }
        if current.len() != before {
            element
                .attributes
                .borrow_mut()
                .insert("class", current.join(" "));
        }
    }

    fn remove_classes(&self, classes: &[&str]) {
        let Some(element) = self.as_element() else {
            return;
        };
        let mut current = self.classes();
        let before = current.len();
        current.retain(|c| !classes.contains(&c.as_str()));
        if current.len() == before {
            return;
        }
        let mut attributes = element.attributes.borrow_mut();
        if current.is_empty() {
            attributes.remove("class");
        } else {
            attributes.insert("class", current.join(" "));
        }
    }

    fn element_children(&self) -> Vec<NodeRef> {
        self.children()
            .elements()
            .map(|child| child.as_node().clone())
            .collect()
    }

    fn children_named(&self, tag: &str) -> Vec<NodeRef> {
        self.element_children()
            .into_iter()
            .filter(|child| child.tag_name().as_deref() == Some(tag))
            .collect()
    }

    fn take_children(&self) -> Vec<NodeRef> {
        let children: Vec<NodeRef> = self.children().collect();
        for child in &children {
            child.detach();
        }
        children
    }
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
