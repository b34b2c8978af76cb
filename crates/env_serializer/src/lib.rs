// crates/env_serializer/src/lib.rs

//! Turns a schema plus the current form values into `.env` file text.
//!
//! Output shape, one declaration per line:
//!
//! ```text
//! DISCORD_BOT_TOKEN=""
//! ...
//! ENABLE_VK_MODULE="true"
//! DEBUG="false"
//! ...
//! ```
//!
//! Secrets come first with empty values, then the capability flags, then every
//! schema field in declaration order. The result depends only on the state.

mod tables;

use env_schema::Schema;
use form_state::FormState;

pub use tables::{Tables, CAPABILITY_FLAGS, DEFAULT_TABLES, SECRETS, SUFFIXES};

/// Line terminator used throughout the generated file.
pub const LINE_ENDING: &str = "\n";

/// Value written for every capability flag.
pub const CAPABILITY_VALUE: &str = "true";

const HEADER_COMMENTS: &[&str] = &["# Bot configuration file", "# Generated automatically"];

#[derive(Clone, Copy, Debug, Default)]
pub struct SerializeOptions {
    /// Precede the file with a header and each group with a `# <title>` line.
    pub section_comments: bool,
}

/// Serializes with the default tables and no comments.
pub fn serialize(schema: Schema<'_>, state: &FormState) -> String {
    serialize_with(schema, state, &DEFAULT_TABLES, SerializeOptions::default())
}

pub fn serialize_with(
    schema: Schema<'_>,
    state: &FormState,
    tables: &Tables<'_>,
    options: SerializeOptions,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    if options.section_comments {
        lines.extend(HEADER_COMMENTS.iter().map(|c| c.to_string()));
        lines.push(String::new());
    }

    lines.extend(tables.secrets.iter().map(|key| declaration(key, "")));
    lines.extend(
        tables
            .capability_flags
            .iter()
            .map(|key| declaration(key, CAPABILITY_VALUE)),
    );

    if options.section_comments {
        for group in schema.groups() {
            lines.push(String::new());
            lines.push(format!("# {}", group.title));
            lines.extend(
                schema
                    .fields_in(group.group)
                    .map(|field| field_line(field.key, state, tables)),
            );
        }
    } else {
        lines.extend(schema.iter().map(|field| field_line(field.key, state, tables)));
    }

    lines.join(LINE_ENDING)
}

fn field_line(key: &str, state: &FormState, tables: &Tables<'_>) -> String {
    let raw = state.get(key).unwrap_or_default();
    match tables.suffix_for(key) {
        Some(suffix) => declaration(key, &format!("{}{}", raw, suffix)),
        None => declaration(key, raw),
    }
}

fn declaration(key: &str, value: &str) -> String {
    format!("{}=\"{}\"", key, escape_value(value))
}

/// Escapes a value for a double-quoted dotenv string so it stays on one line.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
