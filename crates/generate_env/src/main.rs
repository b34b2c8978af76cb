use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::io;

use generate_env::session::{run_interactive, saved_notice};
use generate_env::{apply_edits, serialize_options, sink_for, AppConfig, CliArgs, Session};

fn main() -> Result<()> {
    let matches = Command::new("generate_env")
        .version("0.1.0")
        .about("Generates the bot's .env configuration file from the built-in field schema")
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .help("Change a field before saving (repeatable, applied in order)"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("Show the form with current values instead of saving")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Edit the form with commands read from stdin")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Write the file to stdout instead of the output directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output_dir")
                .long("output-dir")
                .num_args(1)
                .help("Directory to save the file in [env: GENERATE_ENV_OUTPUT_DIR] [default: .]"),
        )
        .arg(
            Arg::new("filename")
                .long("filename")
                .num_args(1)
                .help("Name of the saved file [env: GENERATE_ENV_FILENAME] [default: .env]"),
        )
        .arg(
            Arg::new("with_comments")
                .long("with-comments")
                .help("Add a header and a comment line before each group")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let cli = cli_args(&matches);
    init_logging(cli.verbose);

    let config = AppConfig::resolve(cli, |key| env::var(key).ok())?;
    log::debug!("Configuration: {:?}", config);

    let mut session = Session::new(env_schema::canonical());
    apply_edits(&mut session, &config.edits)?;

    if config.list {
        println!("{}", session.render());
        return Ok(());
    }

    let sink = sink_for(&config)?;
    let options = serialize_options(&config);

    if config.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return run_interactive(
            &mut session,
            stdin.lock(),
            &mut stdout,
            sink.as_ref(),
            &config.filename,
            options,
        );
    }

    let saved = session
        .save(sink.as_ref(), &config.filename, options)
        .context("Failed to save the configuration file")?;
    if !config.to_stdout {
        println!("{}", saved_notice(&config.filename, &saved));
    }
    Ok(())
}

fn cli_args(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        sets: matches
            .get_many::<String>("set")
            .unwrap_or_default()
            .cloned()
            .collect(),
        list: matches.get_flag("list"),
        interactive: matches.get_flag("interactive"),
        stdout: matches.get_flag("stdout"),
        output_dir: matches.get_one::<String>("output_dir").cloned(),
        filename: matches.get_one::<String>("filename").cloned(),
        with_comments: matches.get_flag("with_comments"),
        verbose: matches.get_flag("verbose"),
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `--verbose` selects debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
