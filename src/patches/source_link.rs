//! Unwraps the "Show Source" link in the navbar.
//!
//! Sphinx emits `<div id="sourcelink">` around the link, which breaks the inline layout of a
//! Bootstrap nav. The parent of `#sourcelink` ends up holding only the wrapper's contents.

use crate::dom::{select_all, NodeExt};
use crate::error::PatchResult;
use crate::patches::{Applied, Patch};
use kuchikikiki::NodeRef;

/// Replaces the contents of each `.nav #sourcelink` parent with the link's own contents.
pub struct SourceLink;

impl Patch for SourceLink {
    fn name(&self) -> &'static str {
        "source-link"
    }

    fn apply(&self, document: &NodeRef) -> PatchResult<Applied> {
        let mut unwrapped = 0;
        for link in select_all(document, ".nav #sourcelink")? {
            let Some(parent) = link.parent() else {
                continue;
            };
            let contents = link.take_children();
            parent.take_children();
            for child in contents {
                parent.append(child);
            }
            unwrapped += 1;
        }
        Ok(unwrapped.into())
    }
}

#[cfg(test)]
#[path = "../tests/source_link.rs"]
mod tests;
