//! The page-ready handler: every patch, in order, over one parsed document.
//!
//! Patches run best-effort. A precondition failure is logged and recorded in the [`PageReport`],
//! and patching carries on with the next TOC root and the next patch, so a page with an odd local
//! TOC still gets its tables and admonitions styled.

use crate::config::Config;
use crate::dom::{parse_html, serialize};
use crate::error::Error;
use crate::patches::admonitions::Admonitions;
use crate::patches::inline_code::InlineCode;
use crate::patches::source_link::SourceLink;
use crate::patches::tables::Tables;
use crate::patches::toc::{GlobalToc, LocalToc};
use crate::patches::{Applied, Patch};
use crate::report::{PageReport, PatchOutcome};
use kuchikikiki::NodeRef;
use std::fs;
use std::path::Path;

/// Ordered collection of patches run once per document.
pub struct ReadyHandler {
    patches: Vec<Box<dyn Patch>>,
}

impl ReadyHandler {
    #[must_use]
    /// Create a handler with no patches.
    pub fn new() -> Self {
        Self {
            patches: Vec::new(),
        }
    }

    #[must_use]
    /// The standard sequence: global TOC, local TOC, tables, admonitions, then the opt-in patches.
    pub fn from_config(cfg: &Config) -> Self {
        let mut handler = Self::new();
        handler.push(Box::new(GlobalToc));
        handler.push(Box::new(LocalToc));
        handler.push(Box::new(Tables));
        handler.push(Box::new(Admonitions));
        if cfg.inline_code {
            handler.push(Box::new(InlineCode));
        }
        if cfg.source_link {
            handler.push(Box::new(SourceLink));
        }
        handler
    }

    /// Append a patch; patches run in insertion order.
    pub fn push(&mut self, patch: Box<dyn Patch>) {
        self.patches.push(patch);
    }

    #[must_use]
    /// Names of the patches in execution order.
    pub fn patch_names(&self) -> Vec<&'static str> {
        self.patches.iter().map(|p| p.name()).collect()
    }

    /// Apply every patch to `document`.
    pub fn run(&self, document: &NodeRef) -> PageReport {
        let mut report = PageReport::default();
        for patch in &self.patches {
            tracing::debug!(patch = patch.name(), "Running patch");
            let applied = patch.apply(document).unwrap_or_else(|e| Applied {
                changed: 0,
                errors: vec![e],
            });
            for e in &applied.errors {
                tracing::warn!(patch = patch.name(), error = %e, "Skipping");
            }
            let outcome = PatchOutcome {
                patch: patch.name().to_string(),
                changed: applied.changed,
                skipped: applied.errors.iter().map(ToString::to_string).collect(),
            };
            report.patches.push(outcome);
        }
        report
    }
}

impl Default for ReadyHandler {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[must_use]
/// Parse, patch and serialise an HTML string.
pub fn patch_html(html: &str, cfg: &Config) -> (String, PageReport) {
    let document = parse_html(html);
    let report = ReadyHandler::from_config(cfg).run(&document);
    (serialize(&document), report)
}

/// Patch a file, rewriting it in place unless `dry_run` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn patch_file(path: &Path, cfg: &Config, dry_run: bool) -> Result<PageReport, Error> {
    let html = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (patched, mut report) = patch_html(&html, cfg);
    report.path = Some(path.to_path_buf());

    if dry_run {
        tracing::info!(path = %path.display(), "Dry run, not writing");
    } else {
        fs::write(path, patched).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Patched");
    }
    Ok(report)
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
