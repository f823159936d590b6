//! Patch trait and the transformations applied to a Sphinx page.
//!
//! Each patch is a single named rewrite of a parsed document, from Sphinx's default class names to
//! the Bootstrap ones. A patch reports how many elements it touched, plus a [`PatchError`] for each
//! part of the page that was not shaped the way it expects. Those parts are left alone and the
//! rest of the page is still patched.

use crate::error::{PatchError, PatchResult};
use kuchikikiki::NodeRef;

pub mod admonitions;
pub mod inline_code;
pub mod source_link;
pub mod tables;
pub mod toc;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// What a patch did to one document.
pub struct Applied {
    /// Elements changed.
    pub changed: usize,
    /// Precondition failures for the parts that were skipped.
    pub errors: Vec<PatchError>,
}

impl Applied {
    /// Fold in the result of patching one part of the page.
    pub fn record(&mut self, result: PatchResult<usize>) {
        match result {
            Ok(changed) => self.changed += changed,
            Err(e) => self.errors.push(e),
        }
    }
}

impl From<usize> for Applied {
    fn from(changed: usize) -> Self {
        Self {
            changed,
            errors: Vec::new(),
        }
    }
}

/// A single named DOM transformation.
pub trait Patch {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Rewrite `document` in place.
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError`] if the patch could not run at all, e.g. a selector failed to
    /// parse. Per-element precondition failures are collected in [`Applied::errors`] instead.
    fn apply(&self, document: &NodeRef) -> PatchResult<Applied>;
}
