//! Table-of-contents lists as Bootstrap dropdown menus.
//!
//! Sphinx renders a toctree as a `<ul>` of `<li><a>` items, and the theme wraps it in a further
//! list root (`ul.globaltoc`, `ul.localtoc`). Bootstrap wants one flat `.dropdown-menu` whose
//! links are `.dropdown-item`s, so the wrapper level is pulled up into the root.

use crate::dom::{new_element, select_all, NodeExt};
use crate::error::{PatchError, PatchResult};
use crate::patches::{Applied, Patch};
use kuchikikiki::NodeRef;

/// Class marking a list root as a dropdown.
pub const DROPDOWN_MENU: &str = "dropdown-menu";
/// Class marking a link as a dropdown entry.
pub const DROPDOWN_ITEM: &str = "dropdown-item";
/// Class of the separator placed between a page title and its sections.
pub const DROPDOWN_DIVIDER: &str = "dropdown-divider";

/// Check that `root` wraps exactly one element with tag `tag`, and return it.
///
/// # Errors
///
/// [`PatchError::ChildCount`] or [`PatchError::UnexpectedTag`] when the shape is wrong.
pub fn single_child(root: &NodeRef, tag: &str) -> PatchResult<NodeRef> {
    let parent = root.tag_name().unwrap_or_default();
    let mut children = root.element_children();
    if children.len() != 1 {
        return Err(PatchError::ChildCount {
            parent,
            found: children.len(),
        });
    }
    let child = children.remove(0);
    let found = child.tag_name().unwrap_or_default();
    if found != tag {
        return Err(PatchError::UnexpectedTag {
            parent,
            expected: tag.to_string(),
            found,
        });
    }
    Ok(child)
}

/// Pull the items of a TOC root's nested list up one level and mark it as a dropdown.
///
/// The root must wrap exactly one `<ul>`. Its `<li>` children are moved under the root in order,
/// the empty `<ul>` is removed, the root gains `dropdown-menu` and each top-level link gains
/// `dropdown-item`. Returns the number of items moved.
///
/// # Errors
///
/// Fails without touching the tree if the root does not wrap exactly one `<ul>`.
pub fn flatten_toc(root: &NodeRef) -> PatchResult<usize> {
    let nested = single_child(root, "ul")?;

    let items = nested.children_named("li");
    for item in &items {
        item.detach();
        root.append(item.clone());
    }
    nested.detach();

    mark_dropdown(root);
    Ok(items.len())
}

fn mark_dropdown(root: &NodeRef) {
    root.add_classes(&[DROPDOWN_MENU]);
    for item in root.children_named("li") {
        for link in item.children_named("a") {
            link.add_classes(&[DROPDOWN_ITEM]);
        }
    }
}

/// Turn the second level of a flattened local TOC into entries after a divider.
///
/// After [`flatten_toc`] a local TOC root holds a single `<li>` for the page title, whose nested
/// list holds the page's sections. A divider is appended to the root, then every section item is
/// moved after it with its own subsections dropped. Returns the number of items promoted.
///
/// # Errors
///
/// Fails without touching the tree unless the root holds exactly one `<li>`.
pub fn promote_second_level(root: &NodeRef) -> PatchResult<usize> {
    let title = single_child(root, "li")?;

    if let Some(like) = root.as_element() {
        root.append(new_element(like, "div", &[DROPDOWN_DIVIDER]));
    }

    let wrappers = title.children_named("ul");
    let mut promoted = 0;
    for wrapper in &wrappers {
        for item in wrapper.children_named("li") {
            for deeper in item.children_named("ul") {
                deeper.detach();
            }
            for link in item.children_named("a") {
                link.add_classes(&[DROPDOWN_ITEM]);
            }
            item.detach();
            root.append(item);
            promoted += 1;
        }
        wrapper.detach();
    }
    Ok(promoted)
}

/// The site-wide TOC in the navbar (`ul.globaltoc`).
///
/// When the TOC has no entries at all its `.globaltoc-container` is removed instead, so the navbar
/// shows no empty dropdown.
pub struct GlobalToc;

impl Patch for GlobalToc {
    fn name(&self) -> &'static str {
        "global-toc"
    }

    fn apply(&self, document: &NodeRef) -> PatchResult<Applied> {
        if select_all(document, "ul.globaltoc li")?.is_empty() {
            let containers = select_all(document, ".globaltoc-container")?;
            for container in &containers {
                container.detach();
            }
            tracing::debug!(removed = containers.len(), "Removed empty global TOC");
            return Ok(containers.len().into());
        }

        let mut applied = Applied::default();
        for root in select_all(document, "ul.globaltoc")? {
            applied.record(flatten_toc(&root));
        }
        Ok(applied)
    }
}

/// The in-page TOC (`ul.localtoc`), flattened to title, divider, then sections.
pub struct LocalToc;

impl Patch for LocalToc {
    fn name(&self) -> &'static str {
        "local-toc"
    }

    fn apply(&self, document: &NodeRef) -> PatchResult<Applied> {
        let mut applied = Applied::default();
        for root in select_all(document, "ul.localtoc")? {
            match flatten_toc(&root) {
                Ok(moved) => {
                    applied.changed += moved;
                    applied.record(promote_second_level(&root));
                }
                Err(e) => applied.errors.push(e),
            }
        }
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "../tests/toc.rs"]
mod tests;
