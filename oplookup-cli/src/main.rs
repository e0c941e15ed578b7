//! `oplookup` - resolve 1Password Connect secret coordinates from the shell
//!
//! Looks up a single `<vault>/<item>/<field>` coordinate and prints the
//! field value on stdout. Diagnostics go to stderr.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, ConnectionArgs};
use oplookup_core::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();

    if let Some(config) = tracing_config(&cli) {
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let connection = ConnectionArgs {
        host: cli.host.as_deref(),
        token: cli.token.as_deref(),
    };
    let result = commands::dispatch(connection, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Logging is enabled by `-v` (stderr) or `--log-file`; `-q` only silences stderr.
fn tracing_config(cli: &Cli) -> Option<TracingConfig> {
    let level = TracingLevel::from_verbosity(cli.verbose);
    match &cli.log_file {
        Some(path) => Some(
            TracingConfig::new()
                .with_level(level)
                .with_output(TracingOutput::File { path: path.clone() }),
        ),
        None if cli.verbose > 0 && !cli.quiet => Some(TracingConfig::new().with_level(level)),
        None => None,
    }
}
