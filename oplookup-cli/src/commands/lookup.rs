//! Lookup command: resolve one coordinate and print its value.

use std::io::Write;

use oplookup_core::{ConnectClient, ConnectConfig, Coordinate, CoordinateResolver};
use secrecy::SecretString;
use serde::Serialize;

use crate::cli::{ConnectionArgs, OutputFormat};
use crate::error::CliError;

/// JSON shape of a lookup result
#[derive(Serialize)]
struct LookupOutput<'a> {
    value: &'a str,
}

/// Resolve the single coordinate in `terms` and print its value.
pub fn cmd_lookup(
    connection: ConnectionArgs<'_>,
    terms: &[String],
    section: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let coordinate = Coordinate::from_terms(terms)?;

    let config = ConnectConfig::resolve(
        connection.host.map(str::to_string),
        connection.token.map(|t| SecretString::from(t.to_string())),
    )?;
    tracing::debug!(host = %config.host(), coordinate = %coordinate, "Resolving coordinate");

    let client = ConnectClient::new(&config)?;
    let resolver = CoordinateResolver::new(client);

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;
    let value = rt.block_on(resolver.resolve_coordinate(&coordinate, section))?;

    let mut stdout = std::io::stdout().lock();
    write_value(&mut stdout, &value, format)?;
    Ok(())
}

fn write_value(out: &mut impl Write, value: &str, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => writeln!(out, "{value}")?,
        OutputFormat::Json => {
            let json = serde_json::to_string(&LookupOutput { value })
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
