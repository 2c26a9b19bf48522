//! Document model.
//!
//! A [`Document`] is one documentation source file: its root-relative filename, its raw
//! content, and the facts derived from both. Every fact is computed from the filename and
//! content alone, and a document never changes after construction.

mod dates;
mod front_matter;
mod source;

pub use dates::{FrontMatterDate, filename_date};
pub use front_matter::FrontMatter;
pub use source::{DocumentLoader, ReadFailure, SourceFile};

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{DocsLintError, Result};
use crate::path_utils::segments;

/// Matches locale directory names such as `en`, `ja` or `zh_tw`.
pub const DEFAULT_LOCALE_PATTERN: &str = r"^[a-z]{2}(?:_[a-z]{2})?$";

/// Directory name of the dated posts collection.
pub const DEFAULT_POSTS_DIR: &str = "_posts";

pub const LANG_KEY: &str = "lang";
pub const AUTHOR_KEY: &str = "author";
pub const TRANSLATOR_KEY: &str = "translator";
pub const DATE_KEY: &str = "date";

/// How a path says which locale it belongs to and whether it is a post.
#[derive(Debug, Clone)]
pub struct PathConventions {
    locale_pattern: Regex,
    posts_dir: String,
}

impl PathConventions {
    /// # Errors
    /// Returns an error if `locale_pattern` is not a valid regular expression.
    pub fn new(locale_pattern: &str, posts_dir: impl Into<String>) -> Result<Self> {
        let locale_pattern =
            Regex::new(locale_pattern).map_err(|source| DocsLintError::InvalidRegex {
                pattern: locale_pattern.to_string(),
                source,
            })?;

        Ok(Self {
            locale_pattern,
            posts_dir: posts_dir.into(),
        })
    }

    /// Locale code of the leading directory, if it is a locale directory.
    #[must_use]
    pub fn lang_code(&self, filename: &str) -> Option<String> {
        let mut parts = segments(filename);
        let first = parts.next()?;
        // A file directly at the root is never locale-scoped.
        parts.next()?;
        self.locale_pattern
            .is_match(first)
            .then(|| first.to_string())
    }

    #[must_use]
    pub fn is_post(&self, filename: &str) -> bool {
        let parts: Vec<_> = segments(filename).collect();
        parts
            .split_last()
            .is_some_and(|(_, dirs)| dirs.iter().any(|d| *d == self.posts_dir))
    }
}

impl Default for PathConventions {
    fn default() -> Self {
        Self {
            locale_pattern: Regex::new(DEFAULT_LOCALE_PATTERN).expect("Invalid regex"),
            posts_dir: DEFAULT_POSTS_DIR.to_string(),
        }
    }
}

/// One documentation source file and its derived facts.
#[derive(Debug, Clone)]
pub struct Document {
    filename: String,
    content: String,
    front_matter: Option<FrontMatter>,
    lang_code: Option<String>,
    is_post: bool,
    filename_date: Option<NaiveDate>,
}

impl Document {
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
        conventions: &PathConventions,
    ) -> Self {
        let filename = filename.into();
        let content = content.into();

        let front_matter = FrontMatter::extract(&content);
        let lang_code = conventions.lang_code(&filename);
        let is_post = conventions.is_post(&filename);
        let filename_date = segments(&filename).last().and_then(filename_date);

        Self {
            filename,
            content,
            front_matter,
            lang_code,
            is_post,
            filename_date,
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub const fn front_matter(&self) -> Option<&FrontMatter> {
        self.front_matter.as_ref()
    }

    #[must_use]
    pub fn lang_code(&self) -> Option<&str> {
        self.lang_code.as_deref()
    }

    #[must_use]
    pub const fn is_post(&self) -> bool {
        self.is_post
    }

    #[must_use]
    pub const fn filename_date(&self) -> Option<NaiveDate> {
        self.filename_date
    }

    /// The `lang` front matter value, trimmed. Blank counts as absent.
    #[must_use]
    pub fn declared_lang(&self) -> Option<String> {
        self.field_text(LANG_KEY)
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty())
    }

    /// Declared language, falling back to the locale directory.
    #[must_use]
    pub fn language(&self) -> Option<String> {
        self.declared_lang()
            .or_else(|| self.lang_code.clone())
    }

    #[must_use]
    pub fn front_matter_date(&self) -> Option<FrontMatterDate> {
        self.field_text(DATE_KEY)
            .as_deref()
            .and_then(FrontMatterDate::parse)
    }

    #[must_use]
    pub fn has_final_newline(&self) -> bool {
        self.content.ends_with(['\n', '\r'])
    }

    #[must_use]
    pub fn has_trailing_whitespace(&self) -> bool {
        self.content.split('\n').any(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.ends_with([' ', '\t'])
        })
    }

    // Predicates

    #[must_use]
    pub fn lang_missing(&self) -> bool {
        self.lang_code.is_some() && self.declared_lang().is_none()
    }

    #[must_use]
    pub fn lang_not_matching_filename(&self) -> bool {
        match (self.lang_code.as_deref(), self.declared_lang()) {
            (Some(code), Some(declared)) => code != declared,
            _ => false,
        }
    }

    #[must_use]
    pub fn no_newline_at_eof(&self) -> bool {
        !self.content.is_empty() && !self.has_final_newline()
    }

    #[must_use]
    pub fn trailing_whitespace(&self) -> bool {
        self.has_trailing_whitespace()
    }

    #[must_use]
    pub fn author_missing(&self) -> bool {
        self.field_is_blank(AUTHOR_KEY)
    }

    /// Translations need a translator; documents in `canonical_lang` do not.
    #[must_use]
    pub fn translator_missing(&self, canonical_lang: &str) -> bool {
        self.language()
            .is_some_and(|lang| lang != canonical_lang && self.field_is_blank(TRANSLATOR_KEY))
    }

    #[must_use]
    pub fn date_missing(&self) -> bool {
        self.front_matter_date().is_none()
    }

    /// Compared at UTC day granularity; false unless both dates parse.
    #[must_use]
    pub fn date_mismatch(&self) -> bool {
        match (self.filename_date, self.front_matter_date()) {
            (Some(from_name), Some(from_yaml)) => from_name != from_yaml.utc_date(),
            _ => false,
        }
    }

    #[must_use]
    pub fn yaml_date_not_utc(&self) -> bool {
        self.front_matter_date().is_some_and(|date| !date.is_utc())
    }

    fn field_text(&self, key: &str) -> Option<String> {
        self.front_matter.as_ref().and_then(|fm| fm.text(key))
    }

    fn field_is_blank(&self, key: &str) -> bool {
        self.front_matter.as_ref().is_none_or(|fm| fm.is_blank(key))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
