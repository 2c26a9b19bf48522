mod violations;

pub use violations::ViolationMap;

use rayon::prelude::*;

use crate::config::RulesConfig;
use crate::document::{Document, SourceFile};
use crate::rules::{RuleSet, RuleSettings, UNREADABLE_MESSAGE};

pub trait Checker {
    /// Messages of every applicable rule `doc` violates, in rule order.
    fn check(&self, doc: &Document) -> Vec<String>;
}

/// Applies a [`RuleSet`]: universal rules to every document, post rules to posts.
#[derive(Debug, Clone, Default)]
pub struct RuleChecker {
    rules: RuleSet,
    settings: RuleSettings,
}

impl RuleChecker {
    #[must_use]
    pub const fn new(rules: RuleSet, settings: RuleSettings) -> Self {
        Self { rules, settings }
    }

    /// The standard rules with settings from configuration.
    #[must_use]
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(RuleSet::standard(), RuleSettings::from_config(config))
    }
}

impl Checker for RuleChecker {
    fn check(&self, doc: &Document) -> Vec<String> {
        // Every rule runs; one failure never hides another.
        self.rules
            .applicable(doc)
            .filter(|rule| rule.violated_by(doc, &self.settings))
            .map(|rule| rule.message.to_string())
            .collect()
    }
}

/// Check every source and collect violations in source order.
///
/// Documents are evaluated in parallel; results are merged back in the order given.
pub fn check_all<C: Checker + Sync>(checker: &C, sources: &[SourceFile]) -> ViolationMap {
    let results: Vec<Vec<String>> = sources
        .par_iter()
        .map(|source| match source {
            SourceFile::Parsed(doc) => checker.check(doc),
            SourceFile::Unreadable(failure) => {
                vec![format!("{UNREADABLE_MESSAGE}: {}", failure.reason)]
            }
        })
        .collect();

    let mut violations = ViolationMap::new();
    for (source, messages) in sources.iter().zip(results) {
        violations.record(source.filename(), messages);
    }

    log::info!(
        "checked {} files, {} with violations",
        sources.len(),
        violations.len()
    );
    violations
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
