//! CLI error types and exit codes.

use oplookup_core::{ClientError, ConfigError, LookupError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, usage, or transport failures
    pub const GENERAL_ERROR: i32 = 1;
    /// A coordinate segment could not be resolved
    pub const NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Vault, item, section or field not found
    #[error("{0}")]
    NotFound(LookupError),

    /// Any other lookup failure
    #[error("{0}")]
    Lookup(LookupError),

    /// The Connect client could not be set up
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LookupError> for CliError {
    fn from(err: LookupError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err)
        } else {
            Self::Lookup(err)
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, malformed coordinate, transport, IO)
    /// - 2: Not found
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => exit_codes::NOT_FOUND,
            Self::Config(_)
            | Self::Lookup(_)
            | Self::Client(_)
            | Self::Runtime(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
