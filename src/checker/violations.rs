use indexmap::IndexMap;
use indexmap::map::Iter;

/// Violation messages per file, in discovery order.
///
/// A file is present only if it has at least one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ViolationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append messages for `filename`. Empty input leaves the map unchanged.
    pub fn record<I, S>(&mut self, filename: &str, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut messages = messages.into_iter().map(Into::<String>::into).peekable();
        if messages.peek().is_none() {
            return;
        }

        match self.entries.get_mut(filename) {
            Some(existing) => existing.extend(messages),
            None => {
                self.entries.insert(filename.to_string(), messages.collect());
            }
        }
    }

    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&[String]> {
        self.entries.get(filename).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    /// Number of files with violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ViolationMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "violations_tests.rs"]
mod tests;
