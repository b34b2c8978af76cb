// crates/form_state/src/errors.rs

use thiserror::Error;

/// Errors raised while applying an edit to the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetError {
    /// A number field received something other than ASCII digits.
    /// Contained within the store; the previous value is kept.
    #[error("invalid numeric input {value:?} for {key}: only digits are allowed")]
    InvalidNumericInput { key: String, value: String },

    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Per-field messages for rejected edits. Only number fields ever appear here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, message)| message.as_str())
            .filter(|message| !message.is_empty())
    }

    pub fn record(&mut self, key: &str, message: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = message.to_string(),
            None => self.entries.push((key.to_string(), message.to_string())),
        }
    }

    pub fn clear(&mut self, key: &str) {
        self.entries.retain(|(k, _)| *k != key);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, message)| (k.as_str(), message.as_str()))
    }
}
