// crates/form_state/src/lib.rs

//! In-memory form values for one editing session.
//!
//! A [`FormState`] always holds exactly one value per schema field. Edits go
//! through [`FormState::set`], which applies the digit-only rule to number
//! fields and records rejections in a separate [`ValidationErrors`] map.

mod errors;

use env_schema::{FieldType, Schema};
use once_cell::sync::Lazy;
use regex::Regex;

pub use errors::{SetError, ValidationErrors};

/// Message shown in place of a number field's description after a rejected edit.
pub const DIGITS_ONLY_MESSAGE: &str = "Only digits are allowed";

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Returns true if `raw` is acceptable for a number field: empty, or ASCII digits only.
pub fn is_valid_number(raw: &str) -> bool {
    raw.is_empty() || DIGITS.is_match(raw)
}

/// Maps a native boolean onto the two literals used in state and output.
pub fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// What happened to an edit that named a known field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetOutcome {
    Accepted,
    /// The previous value was kept and an error was recorded for the key.
    Rejected,
}

/// Current value of every field, in schema order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<(String, String)>,
}

impl FormState {
    /// Seeds a state from every field's default value.
    pub fn initialize(schema: Schema<'_>) -> Self {
        let entries = schema
            .iter()
            .map(|field| (field.key.to_string(), field.default_value.to_string()))
            .collect();
        Self { entries }
    }

    /// Fresh defaults. Any edits made so far are discarded.
    pub fn reset_to_defaults(schema: Schema<'_>) -> Self {
        log::debug!("Resetting {} field(s) to defaults", schema.len());
        Self::initialize(schema)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies a single-key edit.
    ///
    /// Number fields only take an empty string or ASCII digits. Anything else
    /// keeps the previous value and records [`DIGITS_ONLY_MESSAGE`] for the key.
    /// Accepted edits clear any error recorded for the key.
    pub fn set(
        &mut self,
        schema: Schema<'_>,
        errors: &mut ValidationErrors,
        key: &str,
        raw: &str,
    ) -> Result<SetOutcome, SetError> {
        let field = schema
            .find(key)
            .ok_or_else(|| SetError::UnknownField(key.to_string()))?;

        if field.field_type == FieldType::Number && !is_valid_number(raw) {
            let err = SetError::InvalidNumericInput {
                key: field.key.to_string(),
                value: raw.to_string(),
            };
            log::debug!("{}", err);
            errors.record(field.key, DIGITS_ONLY_MESSAGE);
            return Ok(SetOutcome::Rejected);
        }

        let slot = self
            .entries
            .iter_mut()
            .find(|(k, _)| k == field.key)
            .ok_or_else(|| SetError::UnknownField(key.to_string()))?;
        slot.1 = raw.to_string();
        errors.clear(field.key);
        Ok(SetOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_schema::{FieldDescriptor, Group};

    static TEST_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("DEBUG", "Debug", "Verbose", "false", FieldType::Boolean, Group::Boolean),
        FieldDescriptor::new("VK_DELAY", "VK delay", "Delay", "60", FieldType::Number, Group::Timers),
        FieldDescriptor::new("TIMEZONE", "Timezone", "Zone", "Europe/Moscow", FieldType::Text, Group::Timers),
    ];

    fn schema() -> Schema<'static> {
        Schema::new(TEST_FIELDS)
    }

    #[test]
    fn test_initialize_covers_every_key() {
        let state = FormState::initialize(schema());
        let keys: Vec<&str> = state.keys().collect();
        assert_eq!(keys, vec!["DEBUG", "VK_DELAY", "TIMEZONE"]);
        assert_eq!(state.get("VK_DELAY"), Some("60"));
    }

    #[test]
    fn test_schema_built_at_runtime() {
        let fields: Vec<FieldDescriptor> = TEST_FIELDS.iter().rev().copied().collect();
        let schema = Schema::new(&fields);

        let mut state = FormState::initialize(schema);
        let keys: Vec<&str> = state.keys().collect();
        assert_eq!(keys, vec!["TIMEZONE", "VK_DELAY", "DEBUG"]);

        let mut errors = ValidationErrors::default();
        state.set(schema, &mut errors, "VK_DELAY", "7").unwrap();
        assert_eq!(state.get("VK_DELAY"), Some("7"));
        assert_eq!(FormState::reset_to_defaults(schema), FormState::initialize(schema));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let mut state = FormState::initialize(schema());
        let mut errors = ValidationErrors::default();

        let outcome = state.set(schema(), &mut errors, "VK_DELAY", "12a").unwrap();
        assert_eq!(outcome, SetOutcome::Rejected);
        assert_eq!(state.get("VK_DELAY"), Some("60"));
        assert_eq!(errors.get("VK_DELAY"), Some(DIGITS_ONLY_MESSAGE));
    }

    #[test]
    fn test_empty_number_clears_error() {
        let mut state = FormState::initialize(schema());
        let mut errors = ValidationErrors::default();
        state.set(schema(), &mut errors, "VK_DELAY", "x").unwrap();

        let outcome = state.set(schema(), &mut errors, "VK_DELAY", "").unwrap();
        assert_eq!(outcome, SetOutcome::Accepted);
        assert_eq!(state.get("VK_DELAY"), Some(""));
        assert!(errors.get("VK_DELAY").is_none());
    }

    #[test]
    fn test_digits_accepted() {
        let mut state = FormState::initialize(schema());
        let mut errors = ValidationErrors::default();
        state.set(schema(), &mut errors, "VK_DELAY", "-5").unwrap();

        state.set(schema(), &mut errors, "VK_DELAY", "123").unwrap();
        assert_eq!(state.get("VK_DELAY"), Some("123"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_text_and_boolean_accept_anything() {
        let mut state = FormState::initialize(schema());
        let mut errors = ValidationErrors::default();
        state.set(schema(), &mut errors, "TIMEZONE", "12a").unwrap();
        state.set(schema(), &mut errors, "DEBUG", "true").unwrap();
        assert_eq!(state.get("TIMEZONE"), Some("12a"));
        assert_eq!(state.get("DEBUG"), Some("true"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_key_leaves_state_untouched() {
        let mut state = FormState::initialize(schema());
        let before = state.clone();
        let mut errors = ValidationErrors::default();
        let err = state.set(schema(), &mut errors, "NOPE", "1").unwrap_err();
        assert!(matches!(err, SetError::UnknownField(ref k) if k == "NOPE"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = FormState::initialize(schema());
        let mut errors = ValidationErrors::default();
        state.set(schema(), &mut errors, "TIMEZONE", "UTC").unwrap();

        let once = FormState::reset_to_defaults(schema());
        let twice = FormState::reset_to_defaults(schema());
        assert_eq!(once, twice);
        assert_eq!(once, FormState::initialize(schema()));
        assert_ne!(state, once);
    }

    #[test]
    fn test_number_rule() {
        assert!(is_valid_number(""));
        assert!(is_valid_number("0"));
        assert!(is_valid_number("3600"));
        assert!(!is_valid_number(" 1"));
        assert!(!is_valid_number("1.5"));
        assert!(!is_valid_number("١٢"));
    }

    #[test]
    fn test_bool_literal() {
        assert_eq!(bool_literal(true), "true");
        assert_eq!(bool_literal(false), "false");
    }
}
