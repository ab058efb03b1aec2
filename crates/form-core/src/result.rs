use std::collections::BTreeMap;

use serde::Serialize;

/// Path-keyed collection of field-level error messages.
///
/// Keys are field paths (`"username"`, `"education[0].name"`); values are the
/// failing-rule messages for that path in rule order. An empty mapping means
/// the form is valid. Array paths address rows by current display position,
/// not by row id, because position is what the user sees.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(path.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of messages across all paths.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    pub fn messages(&self, path: &str) -> &[String] {
        self.errors.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a path, the one shown inline next to the control.
    pub fn first_message(&self, path: &str) -> Option<&str> {
        self.messages(path).first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(path, messages)| (path.as_str(), messages.as_slice()))
    }
}
