//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use oplookup_core::{HOST_ENV, TOKEN_ENV};

/// Resolve secret coordinates against a 1Password Connect server
#[derive(Parser)]
#[command(name = "oplookup")]
#[command(author, version, about = "Look up 1Password Connect secrets by coordinate")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Connect server URL
    #[arg(long, global = true, env = HOST_ENV)]
    pub host: Option<String>,

    /// Connect access token
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except the looked up value
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Borrowed host and token options shared by all commands
#[derive(Clone, Copy, Default)]
pub struct ConnectionArgs<'a> {
    pub host: Option<&'a str>,
    pub token: Option<&'a str>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single secret value
    #[command(about = "Print the value of the field at <vault>/<item>/<field>")]
    Lookup {
        /// Secret coordinate `<vault>/<item>/<field>`; exactly one is accepted
        #[arg(required = true, value_name = "COORDINATE")]
        terms: Vec<String>,

        /// Section label or id to scope the field lookup to
        #[arg(short, long)]
        section: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "plain", value_enum)]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The raw value followed by a newline
    #[default]
    Plain,
    /// A JSON object `{"value": ...}`
    Json,
}
