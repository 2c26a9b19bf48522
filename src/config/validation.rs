//! Configuration semantic validation.

use crate::config::Config;
use crate::document::PathConventions;
use crate::scanner::PathFilter;
use crate::{DocsLintError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a pattern does not compile or a required value is empty.
pub fn validate_config(config: &Config) -> Result<()> {
    PathFilter::from_config(&config.scanner)?;
    PathConventions::new(&config.rules.locale_pattern, config.rules.posts_dir.as_str())?;

    if config.rules.canonical_lang.trim().is_empty() {
        return Err(DocsLintError::Config(
            "rules.canonical_lang must not be empty".to_string(),
        ));
    }

    let posts_dir = &config.rules.posts_dir;
    if posts_dir.is_empty() || posts_dir.contains(['/', '\\']) {
        return Err(DocsLintError::Config(format!(
            "rules.posts_dir must be a single directory name, got '{posts_dir}'"
        )));
    }

    if let Some(dir) = config.scanner.vendor_dirs.iter().find(|d| d.trim().is_empty()) {
        return Err(DocsLintError::Config(format!(
            "scanner.vendor_dirs must not contain empty entries, got '{dir}'"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
