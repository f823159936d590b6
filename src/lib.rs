//! sphinxstrap: Bootstrap-compatible markup for Sphinx HTML output.
//!
//! Sphinx themes built on Bootstrap usually ship a script that rewrites the page after load:
//! toctrees become dropdown menus, docutils tables get `.table`, admonitions become alerts.
//! This crate does the same rewrite ahead of time on the generated HTML files.
//!
//! ```
//! use sphinxstrap::config::Config;
//! use sphinxstrap::page::patch_html;
//!
//! let html = r#"<div class="admonition warning"><p>Careful</p></div>"#;
//! let (patched, report) = patch_html(html, &Config::default());
//! assert!(patched.contains("alert-warning"));
//! assert!(report.skipped().is_empty());
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod dom;
pub mod error;
pub mod input;
pub mod page;
pub mod patches;
pub mod report;
