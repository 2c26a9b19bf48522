use std::fs;

use crate::cli::InitArgs;
use crate::{DocsLintError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DocsLintError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    log::debug!("wrote configuration template to {}", output_path.display());

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// The default configuration, spelled out with comments.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# docs-lint configuration file

[scanner]
# File extensions to check
extensions = ["md"]

# Paths never checked (regex, matched against the path relative to the root)
exclude = [
    '\A404\.md\z',
    '\AREADME\.md\z',
    '\Aadmin/index\.md',
    '\A[^/]*/examples/',
    '\A_includes/',
]

# Additional exclusions in glob syntax
exclude_globs = []

# Dependency directories skipped during discovery, even through symlinks
vendor_dirs = ["vendor/bundle"]

[rules]
# Language posts are originally written in; other languages need a translator
canonical_lang = "en"

# A leading directory matching this regex is a locale directory
locale_pattern = '^[a-z]{2}(?:_[a-z]{2})?$'

# Directory name of the dated posts collection
posts_dir = "_posts"

# Files allowed to keep trailing whitespace
whitespace_exemptions = [
    "en/news/_posts/2005-07-01-xmlrpcipimethods-vulnerability.md",
    "ja/news/_posts/2005-07-01-20050701.md",
    "de/news/_posts/2005-07-01-xmlrpcipimethods-vulnerability.md",
    "ko/news/_posts/2005-07-01-xmlrpcipimethods-vulnerability.md",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
