// crates/generate_env/src/config.rs

use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub const OUTPUT_DIR_ENV: &str = "GENERATE_ENV_OUTPUT_DIR";
pub const FILENAME_ENV: &str = "GENERATE_ENV_FILENAME";
/// When set to any value, saving to a directory becomes a logged no-op.
pub const DISABLE_FILE_SAVE_ENV: &str = "DISABLE_FILE_SAVE";

pub const DEFAULT_FILENAME: &str = ".env";

/// Raw command-line input, before environment fallbacks are applied.
#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub sets: Vec<String>,
    pub list: bool,
    pub interactive: bool,
    pub stdout: bool,
    pub output_dir: Option<String>,
    pub filename: Option<String>,
    pub with_comments: bool,
    pub verbose: bool,
}

/// Runtime configuration composed from CLI + environment.
/// The command line wins over the environment, which wins over the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub edits: Vec<(String, String)>,
    pub list: bool,
    pub interactive: bool,
    pub to_stdout: bool,
    pub output_dir: PathBuf,
    pub filename: String,
    pub section_comments: bool,
    pub disable_file_save: bool,
}

impl AppConfig {
    pub fn resolve<F>(cli: CliArgs, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let edits = cli
            .sets
            .iter()
            .map(|arg| parse_assignment(arg))
            .collect::<Result<Vec<_>>>()?;

        let output_dir = cli
            .output_dir
            .or_else(|| env(OUTPUT_DIR_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = cli
            .filename
            .or_else(|| env(FILENAME_ENV))
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        Ok(Self {
            edits,
            list: cli.list,
            interactive: cli.interactive,
            to_stdout: cli.stdout,
            output_dir,
            filename,
            section_comments: cli.with_comments,
            disable_file_save: env(DISABLE_FILE_SAVE_ENV).is_some(),
        })
    }
}

/// Splits `KEY=VALUE` at the first `=`. The value may be empty or contain `=`.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected KEY=VALUE, got {:?}", arg))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Missing key in {:?}", arg));
    }
    Ok((key.to_string(), value.to_string()))
}
