mod filter;

pub use filter::{FileFilter, PathFilter};

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{DocsLintError, Result};
use crate::path_utils::relative_filename;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths in discovery order.
    ///
    /// # Errors
    /// Returns an error if the root cannot be read or is not a directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    vendor_dirs: Vec<PathBuf>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            vendor_dirs: Vec::new(),
        }
    }

    /// Skip everything inside these directories, given relative to the scanned root.
    #[must_use]
    pub fn with_vendor_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.vendor_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root).map_err(|source| DocsLintError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(DocsLintError::Config(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        let vendor = VendorDirs::resolve(root, &self.vendor_dirs);
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && vendor.contains(e.path())));

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !is_file(&entry) || vendor.contains(entry.path()) {
                continue;
            }

            let filename = relative_filename(entry.path(), root);
            if self.filter.should_include(&filename) {
                files.push(entry.into_path());
            } else {
                log::trace!("excluded {filename}");
            }
        }

        log::debug!("found {} candidate files under {}", files.len(), root.display());
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

/// Regular files, and symlinks that point at one.
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Canonical locations of dependency cache directories.
struct VendorDirs {
    canonical: Vec<PathBuf>,
}

impl VendorDirs {
    fn resolve(root: &Path, dirs: &[PathBuf]) -> Self {
        let canonical = dirs
            .iter()
            .filter_map(|dir| dunce::canonicalize(root.join(dir)).ok())
            .collect();
        Self { canonical }
    }

    fn contains(&self, path: &Path) -> bool {
        if self.canonical.is_empty() {
            return false;
        }
        dunce::canonicalize(path)
            .is_ok_and(|resolved| self.canonical.iter().any(|dir| resolved.starts_with(dir)))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
