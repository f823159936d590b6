//! Admonition boxes (notes, warnings, errors) as Bootstrap alerts.
//!
//! Every `.admonition` starts as an info alert. Its Sphinx severity class then picks the variant:
//! `warning`/`caution` become a warning alert and `error`/`danger` a danger alert. The two checks
//! are independent, so a block with both kinds of class keeps both variants.

use crate::dom::{select_all, NodeExt};
use crate::error::PatchResult;
use crate::patches::{Applied, Patch};
use kuchikikiki::NodeRef;

/// Sphinx classes that select the warning variant.
pub const WARNING_CLASSES: [&str; 2] = ["warning", "caution"];
/// Sphinx classes that select the danger variant.
pub const DANGER_CLASSES: [&str; 2] = ["error", "danger"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert styling chosen from an admonition's classes.
pub enum Severity {
    /// Default for notes, tips and anything unrecognised.
    Info,
    /// `warning` or `caution`.
    Warning,
    /// `error` or `danger`.
    Danger,
}

impl Severity {
    /// Bootstrap classes for this variant, excluding the base `alert`.
    #[must_use]
    pub fn alert_classes(self) -> &'static [&'static str] {
        match self {
            Self::Info => &["alert-info"],
            Self::Warning => &["alert-warning"],
            // alert-error keeps Bootstrap 2 themes working
            Self::Danger => &["alert-danger", "alert-error"],
        }
    }
}

/// Severities implied by an element's classes, in the order they are applied.
#[must_use]
pub fn severities(node: &NodeRef) -> Vec<Severity> {
    let mut found = Vec::new();
    if node.has_any_class(&WARNING_CLASSES) {
        found.push(Severity::Warning);
    }
    if node.has_any_class(&DANGER_CLASSES) {
        found.push(Severity::Danger);
    }
    if found.is_empty() {
        found.push(Severity::Info);
    }
    found
}

/// Adds `alert` plus a severity variant to every `.admonition`.
pub struct Admonitions;

impl Patch for Admonitions {
    fn name(&self) -> &'static str {
        "admonitions"
    }

    fn apply(&self, document: &NodeRef) -> PatchResult<Applied> {
        let blocks = select_all(document, ".admonition")?;
        for block in &blocks {
            let variants = severities(block);
            block.add_classes(&["alert"]);
            if variants == [Severity::Info] {
                block.add_classes(Severity::Info.alert_classes());
            } else {
                block.remove_classes(Severity::Info.alert_classes());
                for variant in variants {
                    block.add_classes(variant.alert_classes());
                }
            }
        }
        Ok(blocks.len().into())
    }
}

#[cfg(test)]
#[path = "../tests/admonitions.rs"]
mod tests;
