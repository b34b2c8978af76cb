// crates/generate_env/src/render.rs

//! Text rendering of the form for `--list` and the interactive `show` command.

use env_schema::{choices_for, FieldDescriptor, FieldType, Schema};
use form_state::{FormState, ValidationErrors};

/// Draws one field as a labeled control.
pub trait FieldRenderer {
    fn control(&self, field: &FieldDescriptor, value: &str) -> String;
}

/// On/off switch for boolean fields.
pub struct ToggleRenderer;

impl FieldRenderer for ToggleRenderer {
    fn control(&self, field: &FieldDescriptor, value: &str) -> String {
        let mark = if value == "true" { "x" } else { " " };
        format!("[{}] {} ({})", mark, field.key, field.label)
    }
}

/// Free-form input with the default shown as a placeholder.
pub struct InputRenderer;

impl FieldRenderer for InputRenderer {
    fn control(&self, field: &FieldDescriptor, value: &str) -> String {
        let kind = match field.field_type {
            FieldType::Number => "number",
            _ => "text",
        };
        format!(
            "{} ({}) = {:?}  [{}, default {:?}]",
            field.key, field.label, value, kind, field.default_value
        )
    }
}

/// Select over a fixed option list; the current value is starred.
pub struct SelectRenderer {
    pub options: &'static [&'static str],
}

impl FieldRenderer for SelectRenderer {
    fn control(&self, field: &FieldDescriptor, value: &str) -> String {
        let options: Vec<String> = self
            .options
            .iter()
            .map(|option| {
                if *option == value {
                    format!("*{}", option)
                } else {
                    option.to_string()
                }
            })
            .collect();
        format!(
            "{} ({}) = {:?}  [one of: {}]",
            field.key,
            field.label,
            value,
            options.join(", ")
        )
    }
}

/// Picks the renderer for a field: an enumerated override if one exists,
/// otherwise the default for its type.
pub fn renderer_for(field: &FieldDescriptor) -> Box<dyn FieldRenderer> {
    if let Some(options) = choices_for(field.key) {
        return Box::new(SelectRenderer { options });
    }
    match field.field_type {
        FieldType::Boolean => Box::new(ToggleRenderer),
        FieldType::Text | FieldType::Number => Box::new(InputRenderer),
    }
}

/// Renders one field: the control line, then its description or its error.
pub fn render_field(field: &FieldDescriptor, value: &str, error: Option<&str>) -> String {
    let control = renderer_for(field).control(field, value);
    let note = match error {
        Some(message) => format!("error: {}", message),
        None => field.description.to_string(),
    };
    format!("  {}\n      {}", control, note)
}

/// Renders every group with its title, blurb and fields.
pub fn render_form(schema: Schema<'_>, state: &FormState, errors: &ValidationErrors) -> String {
    let mut sections = Vec::new();
    for group in schema.groups() {
        let mut section = format!("== {} ==\n{}\n", group.title, group.description);
        for field in schema.fields_in(group.group) {
            let value = state.get(field.key).unwrap_or_default();
            section.push('\n');
            section.push_str(&render_field(field, value, errors.get(field.key)));
        }
        sections.push(section);
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_schema::{canonical, Group};

    #[test]
    fn test_toggle() {
        let field = FieldDescriptor::new("DEBUG", "Debug mode", "Verbose", "false", FieldType::Boolean, Group::Boolean);
        assert_eq!(ToggleRenderer.control(&field, "true"), "[x] DEBUG (Debug mode)");
        assert_eq!(ToggleRenderer.control(&field, "false"), "[ ] DEBUG (Debug mode)");
    }

    #[test]
    fn test_select_marks_current_value() {
        let field = canonical().find("TIMEZONE").copied().unwrap();
        let line = renderer_for(&field).control(&field, "UTC");
        assert!(line.contains("*UTC"));
        assert!(line.contains("Europe/Moscow"));
        assert!(!line.contains("*Europe/Moscow"));
    }

    #[test]
    fn test_error_replaces_description() {
        let field = FieldDescriptor::new("VK_DELAY", "VK delay", "Delay between VK checks", "60", FieldType::Number, Group::Timers);
        let ok = render_field(&field, "60", None);
        assert!(ok.contains("Delay between VK checks"));

        let bad = render_field(&field, "60", Some("Only digits are allowed"));
        assert!(bad.contains("error: Only digits are allowed"));
        assert!(!bad.contains("Delay between VK checks"));
    }

    #[test]
    fn test_form_lists_every_group_and_field() {
        let schema = canonical();
        let state = FormState::initialize(schema);
        let output = render_form(schema, &state, &ValidationErrors::default());
        for group in schema.groups() {
            assert!(output.contains(&format!("== {} ==", group.title)));
        }
        for field in schema.iter() {
            assert!(output.contains(field.key), "{} missing", field.key);
        }
    }
}
