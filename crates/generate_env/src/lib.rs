// crates/generate_env/src/lib.rs

//! Fills in the bot's configuration form and writes it out as a `.env` file.
//! Form data is never sent anywhere; the only output is the saved file.

pub mod config;
pub mod render;
pub mod session;

use anyhow::{anyhow, Result};
use env_serializer::SerializeOptions;
use form_state::SetOutcome;
use save_file::{DirectorySink, FileSink, StdoutSink};

pub use config::{AppConfig, CliArgs};
pub use session::Session;

/// Applies the `--set` edits in order.
///
/// A rejected numeric edit is reported on stderr and keeps the previous value.
/// An unknown key aborts, since it can only be a typo on the command line.
pub fn apply_edits(session: &mut Session, edits: &[(String, String)]) -> Result<()> {
    for (key, value) in edits {
        match session.set(key, value)? {
            SetOutcome::Accepted => log::debug!("{} = {:?}", key, value),
            SetOutcome::Rejected => eprintln!(
                "Error: {}: {} (keeping {:?})",
                key,
                session.errors().get(key).unwrap_or_default(),
                session.state().get(key).unwrap_or_default()
            ),
        }
    }
    Ok(())
}

/// Chooses the save destination from the configuration.
pub fn sink_for(config: &AppConfig) -> Result<Box<dyn FileSink>> {
    if config.to_stdout {
        return Ok(Box::new(StdoutSink));
    }
    if !config.output_dir.is_dir() {
        return Err(anyhow!(
            "Output directory {} does not exist",
            config.output_dir.display()
        ));
    }
    Ok(Box::new(
        DirectorySink::new(config.output_dir.clone()).disabled(config.disable_file_save),
    ))
}

pub fn serialize_options(config: &AppConfig) -> SerializeOptions {
    SerializeOptions {
        section_comments: config.section_comments,
    }
}
