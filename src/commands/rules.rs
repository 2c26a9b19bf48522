use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::rules::RuleSet;

#[must_use]
pub fn run_rules() -> i32 {
    print!("{}", format_rules(&RuleSet::standard()));
    EXIT_SUCCESS
}

/// One line per rule in evaluation order: id, scope, message.
#[must_use]
pub fn format_rules(rules: &RuleSet) -> String {
    let width = rules.iter().map(|rule| rule.id.len()).max().unwrap_or(0);

    let mut output = String::new();
    for rule in rules.iter() {
        let _ = writeln!(
            output,
            "{:<width$}  {:<5}  {}",
            rule.id,
            rule.scope.as_str(),
            rule.message
        );
    }
    output
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
