//! Path display utilities.
//!
//! Documents are identified by their path relative to the checked root, always with
//! forward-slash separators, so that exclusion patterns, exemption lists and report
//! output behave the same on every platform.

use std::path::{Component, Path};

/// Format `path` relative to `root` with forward slashes.
///
/// Falls back to the path as given when it is not below `root`. A leading `./` is dropped.
#[must_use]
pub fn relative_filename(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let parts: Vec<_> = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();

    normalize_separators(&parts.join("/"))
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Split a `/`-separated filename into its segments, skipping empty ones.
pub fn segments(filename: &str) -> impl Iterator<Item = &str> {
    filename.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "path_utils_tests.rs"]
mod tests;
