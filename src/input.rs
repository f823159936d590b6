//! Document discovery from command line paths.

use crate::error::Error;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Expand files and directories into the documents to patch.
///
/// Files named explicitly are kept whatever their extension. Directories are walked recursively
/// and only files with one of `extensions` are kept. The result is sorted and deduplicated.
///
/// # Errors
///
/// Returns an error if a directory cannot be traversed.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>, Error> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_file() {
            documents.push(path);
            continue;
        }
        if !path.is_dir() {
            tracing::warn!(path = %path.display(), "Skipping missing path");
            continue;
        }
        for entry in WalkDir::new(&path) {
            let entry = entry.map_err(|source| Error::Walk {
                path: path.clone(),
                source,
            })?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                documents.push(entry.into_path());
            }
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
