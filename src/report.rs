//! Serialisable record of what a run changed.
//!
//! The CLI prints a [`RunReport`] as JSON on stdout so a docs build can check, for instance, that
//! no page skipped its TOC patch.

use crate::error::Error;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Result of one patch on one page.
pub struct PatchOutcome {
    /// Patch name, as given by [`Patch::name`](crate::patches::Patch::name).
    pub patch: String,
    /// Elements changed, counting only the parts of the page that were patched.
    pub changed: usize,
    /// Why parts of the page were skipped, one entry per failed precondition.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl PatchOutcome {
    #[must_use]
    /// Whether the patch ran everywhere it matched.
    pub fn is_applied(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Outcomes of every patch run on a single document.
pub struct PageReport {
    /// Source file, absent when patching an in-memory string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// One entry per patch, in execution order.
    pub patches: Vec<PatchOutcome>,
}

impl PageReport {
    #[must_use]
    /// Looks up the outcome of a named patch.
    pub fn outcome(&self, patch: &str) -> Option<&PatchOutcome> {
        self.patches.iter().find(|o| o.patch == patch)
    }

    #[must_use]
    /// Patches that skipped at least part of this page.
    pub fn skipped(&self) -> Vec<&PatchOutcome> {
        self.patches.iter().filter(|o| !o.is_applied()).collect()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
/// Reports for every document in a run.
pub struct RunReport {
    /// Whether files were left untouched on disk.
    pub dry_run: bool,
    /// Per-page reports in input order.
    pub pages: Vec<PageReport>,
}

impl RunReport {
    #[must_use]
    /// Number of skipped parts across all pages.
    pub fn skipped_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.patches)
            .map(|o| o.skipped.len())
            .sum()
    }

    /// Pretty-printed JSON for stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
