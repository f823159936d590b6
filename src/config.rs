//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a sphinxstrap.toml, and if present we load settings from there.
//! This provides the file extensions to match and which optional patches to run.

use crate::error::Error;
use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sphinxstrap.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from sphinxstrap.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["html".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = false)]
    /// Replace docutils `<tt>` literals with `<code>`.
    pub inline_code: bool,
    #[facet(default = false)]
    /// Unwrap the navbar's `#sourcelink` div.
    pub source_link: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["html".to_string()],
            inline_code: false,
            source_link: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from sphinxstrap.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
            Self::default()
        })
    }

    /// Parse a TOML config, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is malformed or has mistyped keys.
    pub fn parse(contents: &str) -> Result<Self, Error> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
