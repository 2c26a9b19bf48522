//! Leading YAML metadata block of a document.

use serde_yaml::{Mapping, Value};

const OPENING_DELIMITER: &str = "---";
const CLOSING_DELIMITERS: [&str; 2] = ["---", "..."];

/// Parsed front matter fields.
///
/// A block that is present but malformed is represented as an empty field set, so every
/// lookup reads as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Extract and parse the front matter block at the start of `content`.
    ///
    /// Returns `None` when the content does not open with a `---` line or the block is
    /// never closed.
    #[must_use]
    pub fn extract(content: &str) -> Option<Self> {
        raw_block(content).map(Self::parse)
    }

    /// Parse the YAML between the delimiters.
    #[must_use]
    pub fn parse(yaml: &str) -> Self {
        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Mapping(fields)) => Self { fields },
            Ok(Value::Null) => Self::default(),
            Ok(_) => {
                log::debug!("front matter is not a mapping, treating as empty");
                Self::default()
            }
            Err(e) => {
                log::debug!("malformed front matter, treating as empty: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True when the key is absent, null, whitespace-only, or an empty collection.
    #[must_use]
    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).is_none_or(value_is_blank)
    }

    /// Scalar text of a field. Sequences, mappings and null have none.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }
}

fn value_is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => value_is_blank(&tagged.value),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Slice out the text between the opening and closing delimiter lines.
fn raw_block(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != OPENING_DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if CLOSING_DELIMITERS.contains(&line.trim_end()) {
            return Some(&content[start..offset]);
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
#[path = "front_matter_tests.rs"]
mod tests;
