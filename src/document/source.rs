use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{Document, PathConventions};
use crate::path_utils::relative_filename;

/// A file that could not be read. It still takes part in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub filename: String,
    pub reason: String,
}

/// A discovered candidate file after loading.
#[derive(Debug, Clone)]
pub enum SourceFile {
    Parsed(Document),
    Unreadable(ReadFailure),
}

impl SourceFile {
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Parsed(doc) => doc.filename(),
            Self::Unreadable(failure) => &failure.filename,
        }
    }
}

/// Reads candidate paths into documents named relative to a root.
pub struct DocumentLoader {
    root: PathBuf,
    conventions: PathConventions,
}

impl DocumentLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, conventions: PathConventions) -> Self {
        Self {
            root: root.into(),
            conventions,
        }
    }

    /// Read one file. A read error becomes [`SourceFile::Unreadable`] instead of failing
    /// the run. Invalid UTF-8 is replaced, never rejected.
    #[must_use]
    pub fn load(&self, path: &Path) -> SourceFile {
        let filename = relative_filename(path, &self.root);
        match fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes).into_owned();
                SourceFile::Parsed(Document::new(filename, content, &self.conventions))
            }
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                SourceFile::Unreadable(ReadFailure {
                    filename,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Read every path, keeping the input order.
    #[must_use]
    pub fn load_all(&self, paths: &[PathBuf]) -> Vec<SourceFile> {
        paths.par_iter().map(|path| self.load(path)).collect()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
