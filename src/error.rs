//! Error types for patching documents and running over files.
//!
//! Structural problems in a page are [`PatchError`]s: they skip one patch and get reported, the
//! rest of the page still gets patched. Anything that stops a run outright is an [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// A precondition on the page markup that a patch found violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A list root did not wrap exactly one element.
    #[error("expected exactly one child element under <{parent}>, found {found}")]
    ChildCount {
        /// Tag name of the element whose children were counted.
        parent: String,
        /// Number of child elements actually present.
        found: usize,
    },

    /// The single wrapped element had the wrong tag.
    #[error("expected <{expected}> under <{parent}>, found <{found}>")]
    UnexpectedTag {
        /// Tag name of the enclosing element.
        parent: String,
        /// Tag name the patch requires.
        expected: String,
        /// Tag name actually present.
        found: String,
    },

    /// A CSS selector failed to parse.
    #[error("invalid selector: {0}")]
    Selector(String),
}

/// Failures that abort processing of a document set.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Walking an input directory failed.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// Directory being traversed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: walkdir::Error,
    },

    /// A config file did not parse.
    #[error("invalid config: {message}")]
    Config {
        /// Rendered parser diagnostic.
        message: String,
    },

    /// The run report could not be encoded.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;
