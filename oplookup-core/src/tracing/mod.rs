//! Tracing integration for structured logging
//!
//! Sets up a `tracing-subscriber` pipeline with an `EnvFilter` and provides
//! the span names used across lookups. Secret values and bearer tokens are
//! never recorded in spans or events.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings (default)
    #[default]
    Warn,
    /// Info level - errors, warnings, and info
    Info,
    /// Debug level - all above plus debug messages
    Debug,
    /// Trace level - all messages including trace
    Trace,
}

impl TracingLevel {
    /// Converts to tracing crate's Level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Maps a `-v` count to a level: 0 warn, 1 info, 2 debug, 3+ trace
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Output destination for tracing logs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Output to stderr; stdout is reserved for lookup results
    #[default]
    Stderr,
    /// Output to a file
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Returns the filter directive this configuration installs
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter
            .clone()
            .unwrap_or_else(|| format!("oplookup_core={0},oplookup={0}", self.level))
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// Call once at startup. Subsequent calls return an error.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter string is invalid
/// - File output is configured but the file cannot be created
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if is_tracing_initialized() {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    match &config.output {
        TracingOutput::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;
        }
        TracingOutput::File { path } => {
            let file = std::fs::File::create(path)
                .map_err(|e| TracingError::FileCreationFailed(e.to_string()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(false)
                        .with_writer(file),
                )
                .try_init()
                .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;
        }
    }

    TRACING_INITIALIZED.store(true, Ordering::SeqCst);
    tracing::debug!(level = %config.level, "Tracing initialized");

    Ok(())
}

/// Checks if tracing has been initialized
#[must_use]
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::SeqCst)
}

/// Standard span names for lookup operations
pub mod span_names {
    /// Full coordinate resolution
    pub const LOOKUP_RESOLVE: &str = "lookup.resolve";
    /// Vault id lookup by name
    pub const STORE_VAULT_BY_NAME: &str = "store.vault_by_name";
    /// Item fetch by id
    pub const STORE_ITEM_BY_ID: &str = "store.item_by_id";
    /// Item fetch by title
    pub const STORE_ITEM_BY_NAME: &str = "store.item_by_name";
}
