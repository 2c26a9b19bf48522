use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::config::ScannerConfig;
use crate::error::{DocsLintError, Result};

/// Decides whether a candidate file is checked.
///
/// `filename` is relative to the scanned root and uses `/` separators.
pub trait FileFilter {
    fn should_include(&self, filename: &str) -> bool;
}

pub struct PathFilter {
    extensions: Vec<String>,
    exclude_patterns: Vec<Regex>,
    exclude_globs: GlobSet,
}

impl PathFilter {
    /// Create a filter from extensions, regex exclusions and glob exclusions.
    ///
    /// # Errors
    /// Returns an error if any regex or glob pattern is invalid.
    pub fn new(
        extensions: Vec<String>,
        exclude_patterns: &[String],
        exclude_globs: &[String],
    ) -> Result<Self> {
        let exclude_patterns = exclude_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| DocsLintError::InvalidRegex {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_globs {
            let glob = Glob::new(pattern).map_err(|e| DocsLintError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_globs = builder
            .build()
            .map_err(|e| DocsLintError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
            exclude_globs,
        })
    }

    /// # Errors
    /// Returns an error if any configured pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(
            config.extensions.clone(),
            &config.exclude,
            &config.exclude_globs,
        )
    }

    fn has_valid_extension(&self, filename: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, filename: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(filename))
            || self.exclude_globs.is_match(filename)
    }
}

impl FileFilter for PathFilter {
    fn should_include(&self, filename: &str) -> bool {
        self.has_valid_extension(filename) && !self.is_excluded(filename)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
