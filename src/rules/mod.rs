//! The fixed rule set.
//!
//! Each rule pairs a pure predicate over a [`Document`] with the message reported when the
//! predicate holds. Rules live in two ordered lists, one applied to every document and one
//! applied to posts only. The list order is the order messages appear in the report.

use indexmap::IndexSet;

use crate::config::RulesConfig;
use crate::document::Document;

/// Prefix of the message recorded for a file that could not be read.
pub const UNREADABLE_MESSAGE: &str = "unreadable file";

/// Which documents a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    AllDocuments,
    PostsOnly,
}

impl RuleScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllDocuments => "all",
            Self::PostsOnly => "posts",
        }
    }
}

/// Inputs a predicate needs beyond the document itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSettings {
    pub canonical_lang: String,
    /// Filenames allowed to keep trailing whitespace.
    pub whitespace_exemptions: IndexSet<String>,
}

impl RuleSettings {
    #[must_use]
    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            canonical_lang: config.canonical_lang.clone(),
            whitespace_exemptions: config.whitespace_exemptions.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_whitespace_exempt(&self, filename: &str) -> bool {
        self.whitespace_exemptions.contains(filename)
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

pub type Predicate = fn(&Document, &RuleSettings) -> bool;

#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    pub scope: RuleScope,
    predicate: Predicate,
}

impl Rule {
    #[must_use]
    pub const fn new(
        id: &'static str,
        message: &'static str,
        scope: RuleScope,
        predicate: Predicate,
    ) -> Self {
        Self {
            id,
            message,
            scope,
            predicate,
        }
    }

    #[must_use]
    pub fn violated_by(&self, doc: &Document, settings: &RuleSettings) -> bool {
        (self.predicate)(doc, settings)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

fn lang_missing(doc: &Document, _: &RuleSettings) -> bool {
    doc.lang_missing()
}

fn lang_mismatch(doc: &Document, _: &RuleSettings) -> bool {
    doc.lang_not_matching_filename()
}

fn no_final_newline(doc: &Document, _: &RuleSettings) -> bool {
    doc.no_newline_at_eof()
}

fn trailing_whitespace(doc: &Document, settings: &RuleSettings) -> bool {
    !settings.is_whitespace_exempt(doc.filename()) && doc.trailing_whitespace()
}

fn author_missing(doc: &Document, _: &RuleSettings) -> bool {
    doc.author_missing()
}

fn translator_missing(doc: &Document, settings: &RuleSettings) -> bool {
    doc.translator_missing(&settings.canonical_lang)
}

fn date_missing(doc: &Document, _: &RuleSettings) -> bool {
    doc.date_missing()
}

fn date_mismatch(doc: &Document, _: &RuleSettings) -> bool {
    doc.date_mismatch()
}

fn date_not_utc(doc: &Document, _: &RuleSettings) -> bool {
    doc.yaml_date_not_utc()
}

const UNIVERSAL_RULES: [Rule; 4] = [
    Rule::new(
        "lang-missing",
        "missing lang variable",
        RuleScope::AllDocuments,
        lang_missing,
    ),
    Rule::new(
        "lang-mismatch",
        "lang variable not matching file location",
        RuleScope::AllDocuments,
        lang_mismatch,
    ),
    Rule::new(
        "no-final-newline",
        "no newline at end of file",
        RuleScope::AllDocuments,
        no_final_newline,
    ),
    Rule::new(
        "trailing-whitespace",
        "trailing whitespace",
        RuleScope::AllDocuments,
        trailing_whitespace,
    ),
];

const POST_RULES: [Rule; 5] = [
    Rule::new(
        "author-missing",
        "missing author variable",
        RuleScope::PostsOnly,
        author_missing,
    ),
    Rule::new(
        "translator-missing",
        "missing translator variable",
        RuleScope::PostsOnly,
        translator_missing,
    ),
    Rule::new(
        "date-missing",
        "missing or invalid date variable",
        RuleScope::PostsOnly,
        date_missing,
    ),
    Rule::new(
        "date-mismatch",
        "date mismatch between filename and YAML front matter (UTC)",
        RuleScope::PostsOnly,
        date_mismatch,
    ),
    Rule::new(
        "date-not-utc",
        "wrong time zone offset in YAML front matter (not UTC)",
        RuleScope::PostsOnly,
        date_not_utc,
    ),
];

/// Ordered rule lists.
#[derive(Debug, Clone)]
pub struct RuleSet {
    universal: Vec<Rule>,
    posts: Vec<Rule>,
}

impl RuleSet {
    /// The built-in rules in their reporting order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            universal: UNIVERSAL_RULES.to_vec(),
            posts: POST_RULES.to_vec(),
        }
    }

    #[must_use]
    pub fn universal(&self) -> &[Rule] {
        &self.universal
    }

    #[must_use]
    pub fn posts(&self) -> &[Rule] {
        &self.posts
    }

    /// Rules applicable to `doc`, universal rules first.
    pub fn applicable<'a>(
        &'a self,
        doc: &Document,
    ) -> impl Iterator<Item = &'a Rule> + use<'a> {
        let posts: &[Rule] = if doc.is_post() { self.posts() } else { &[] };
        self.universal().iter().chain(posts)
    }

    /// Every rule, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.universal().iter().chain(self.posts())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
