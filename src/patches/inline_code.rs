//! Docutils inline literals (`<tt class="docutils literal">`) as `<code>`.
//!
//! Cross-reference literals are left alone, as are literals sitting directly inside a
//! `.reference` link, since the theme styles those through the link.

use crate::dom::{new_element, select_all, NodeExt};
use crate::error::PatchResult;
use crate::patches::{Applied, Patch};
use kuchikikiki::NodeRef;

/// Whether a `<tt>` should become `<code>`.
#[must_use]
pub fn is_plain_literal(node: &NodeRef) -> bool {
    node.has_class("docutils")
        && node.has_class("literal")
        && !node.has_class("xref")
        && !node
            .parent()
            .is_some_and(|parent| parent.has_class("reference"))
}

/// Replaces plain `tt.docutils.literal` elements by `<code>` with the same contents.
pub struct InlineCode;

impl Patch for InlineCode {
    fn name(&self) -> &'static str {
        "inline-code"
    }

    fn apply(&self, document: &NodeRef) -> PatchResult<Applied> {
        let mut replaced = 0;
        for literal in select_all(document, "tt")? {
            let Some(like) = literal.as_element() else {
                continue;
            };
            if !is_plain_literal(&literal) {
                continue;
            }
            let code = new_element(like, "code", &[]);
            for child in literal.take_children() {
                code.append(child);
            }
            literal.insert_before(code);
            literal.detach();
            replaced += 1;
        }
        Ok(replaced.into())
    }
}

#[cfg(test)]
#[path = "../tests/inline_code.rs"]
mod tests;
