use serde::{Deserialize, Serialize};

use crate::document::{DEFAULT_LOCALE_PATTERN, DEFAULT_POSTS_DIR};

/// Paths never checked. Matched against the root-relative, `/`-separated filename.
pub const DEFAULT_EXCLUDE_PATTERNS: [&str; 5] = [
    r"\A404\.md\z",
    r"\AREADME\.md\z",
    r"\Aadmin/index\.md",
    r"\A[^/]*/examples/",
    r"\A_includes/",
];

/// Legacy posts that keep their trailing whitespace verbatim.
pub const DEFAULT_WHITESPACE_EXEMPTIONS: [&str; 4] = [
    "en/news/_posts/2005-07-01-xmlrpcipimethods-vulnerability.md",
    "ja/news/_posts/2005-07-01-20050701.md",
    "de/news/_posts/2005-07-01-xmlrpcipimethods-vulnerability.md",
    "ko/news/_posts/2005-07-01-xmlrpcipimethods-vulnerability.md",
];

pub const DEFAULT_EXTENSIONS: [&str; 1] = ["md"];

/// Dependency cache directories, relative to the checked root.
pub const DEFAULT_VENDOR_DIRS: [&str; 1] = ["vendor/bundle"];

pub const DEFAULT_CANONICAL_LANG: &str = "en";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// File extensions to check. Empty means every file.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Regex exclusion patterns.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Glob exclusion patterns, added to `exclude`.
    #[serde(default)]
    pub exclude_globs: Vec<String>,

    /// Directories whose contents are never checked, even through symlinks.
    #[serde(default = "default_vendor_dirs")]
    pub vendor_dirs: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            exclude_globs: Vec::new(),
            vendor_dirs: default_vendor_dirs(),
        }
    }
}

/// Rule settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Language posts are originally written in. Other languages need a translator.
    #[serde(default = "default_canonical_lang")]
    pub canonical_lang: String,

    /// Regex a leading directory must match to count as a locale directory.
    #[serde(default = "default_locale_pattern")]
    pub locale_pattern: String,

    /// Directory name of the dated posts collection.
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Exact filenames exempt from the trailing whitespace rule.
    #[serde(default = "default_whitespace_exemptions")]
    pub whitespace_exemptions: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            canonical_lang: default_canonical_lang(),
            locale_pattern: default_locale_pattern(),
            posts_dir: default_posts_dir(),
            whitespace_exemptions: default_whitespace_exemptions(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_extensions() -> Vec<String> {
    to_strings(&DEFAULT_EXTENSIONS)
}

fn default_exclude() -> Vec<String> {
    to_strings(&DEFAULT_EXCLUDE_PATTERNS)
}

fn default_vendor_dirs() -> Vec<String> {
    to_strings(&DEFAULT_VENDOR_DIRS)
}

fn default_canonical_lang() -> String {
    DEFAULT_CANONICAL_LANG.to_string()
}

fn default_locale_pattern() -> String {
    DEFAULT_LOCALE_PATTERN.to_string()
}

fn default_posts_dir() -> String {
    DEFAULT_POSTS_DIR.to_string()
}

fn default_whitespace_exemptions() -> Vec<String> {
    to_strings(&DEFAULT_WHITESPACE_EXEMPTIONS)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
