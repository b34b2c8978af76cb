// crates/generate_env/src/session.rs

//! One editing session: the form values, their validation errors, and the
//! line-oriented command loop used by `--interactive`.

use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};

use env_schema::{FieldType, Schema};
use env_serializer::{serialize_with, SerializeOptions, DEFAULT_TABLES};
use form_state::{bool_literal, FormState, SetError, SetOutcome, ValidationErrors};
use save_file::{FileSink, SavedTo};

use crate::render::render_form;

pub struct Session {
    schema: Schema<'static>,
    state: FormState,
    errors: ValidationErrors,
}

impl Session {
    pub fn new(schema: Schema<'static>) -> Self {
        Self {
            schema,
            state: FormState::initialize(schema),
            errors: ValidationErrors::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn set(&mut self, key: &str, raw: &str) -> Result<SetOutcome, SetError> {
        self.state.set(self.schema, &mut self.errors, key, raw)
    }

    /// Flips a boolean field between the `"true"` and `"false"` literals.
    pub fn toggle(&mut self, key: &str) -> Result<&str> {
        let field = self
            .schema
            .find(key)
            .ok_or_else(|| SetError::UnknownField(key.to_string()))?;
        if field.field_type != FieldType::Boolean {
            return Err(anyhow!("{} is not a boolean field", field.key));
        }
        let flipped = bool_literal(self.state.get(field.key) != Some("true"));
        self.set(field.key, flipped)?;
        Ok(flipped)
    }

    /// Discards every edit and every recorded error.
    pub fn reset(&mut self) {
        self.state = FormState::reset_to_defaults(self.schema);
        self.errors.clear_all();
    }

    pub fn render(&self) -> String {
        render_form(self.schema, &self.state, &self.errors)
    }

    pub fn generate(&self, options: SerializeOptions) -> String {
        serialize_with(self.schema, &self.state, &DEFAULT_TABLES, options)
    }

    pub fn save(
        &self,
        sink: &dyn FileSink,
        filename: &str,
        options: SerializeOptions,
    ) -> Result<SavedTo> {
        let content = self.generate(options);
        sink.save(&content, filename)
    }
}

/// A single line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Toggle(String),
    Reset,
    Show,
    Preview,
    Save,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set KEY VALUE   change a field (VALUE may be empty or contain spaces)
  toggle KEY      flip a boolean field
  reset           restore every field to its default
  show            display the form
  preview         print the file that would be saved
  save            save the file
  help            show this message
  quit            leave without saving";

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };
        let command = match word {
            "set" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (key, value.trim_start()),
                    None => (rest, ""),
                };
                if key.is_empty() {
                    return Err(anyhow!("usage: set KEY VALUE"));
                }
                Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            "toggle" if !rest.is_empty() => Command::Toggle(rest.to_string()),
            "toggle" => return Err(anyhow!("usage: toggle KEY")),
            "reset" => Command::Reset,
            "show" => Command::Show,
            "preview" => Command::Preview,
            "save" => Command::Save,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(anyhow!("unknown command: {} (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

/// Runs commands from `input` until `quit` or end of input.
///
/// Problems with a single command are reported on `output` and the loop keeps
/// going. Only I/O failures on `output` end the session early.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    sink: &dyn FileSink,
    filename: &str,
    options: SerializeOptions,
) -> Result<()> {
    writeln!(output, "Type 'help' for a list of commands.")?;
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "Error: {}", err)?;
                continue;
            }
        };
        log::debug!("Session command: {:?}", command);

        match command {
            Command::Set { key, value } => match session.set(&key, &value) {
                Ok(SetOutcome::Accepted) => writeln!(output, "{} = {:?}", key, value)?,
                Ok(SetOutcome::Rejected) => writeln!(
                    output,
                    "Error: {}: {} (kept {:?})",
                    key,
                    session.errors().get(&key).unwrap_or_default(),
                    session.state().get(&key).unwrap_or_default()
                )?,
                Err(err) => writeln!(output, "Error: {}", err)?,
            },
            Command::Toggle(key) => match session.toggle(&key) {
                Ok(value) => writeln!(output, "{} = {:?}", key, value)?,
                Err(err) => writeln!(output, "Error: {}", err)?,
            },
            Command::Reset => {
                session.reset();
                writeln!(output, "Reset: all fields restored to their defaults")?;
            }
            Command::Show => writeln!(output, "{}", session.render())?,
            Command::Preview => writeln!(output, "{}", session.generate(options))?,
            Command::Save => match session.save(sink, filename, options) {
                Ok(saved) => writeln!(output, "{}", saved_notice(filename, &saved))?,
                Err(err) => writeln!(output, "Error: {:#}", err)?,
            },
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Short confirmation shown after a save.
pub fn saved_notice(filename: &str, saved: &SavedTo) -> String {
    match saved {
        SavedTo::File(path) => format!("File {} saved to {}", filename, path.display()),
        SavedTo::Stdout => format!("File {} written to stdout", filename),
        SavedTo::Skipped => format!("File {} not saved (saving is disabled)", filename),
    }
}
