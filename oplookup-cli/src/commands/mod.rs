//! Command handler modules for the CLI.

mod completions;
mod lookup;

use crate::cli::{Commands, ConnectionArgs};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(connection: ConnectionArgs<'_>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Lookup {
            terms,
            section,
            format,
        } => lookup::cmd_lookup(connection, &terms, section.as_deref(), format),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
