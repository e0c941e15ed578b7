//! `oplookup` Core Library
//!
//! Resolves `<vault>/<item>/<field>` secret coordinates against a 1Password
//! Connect server. Each segment may be an identifier or a human label; the
//! resolver picks the lookup strategy per segment and fails with a precise
//! error when a segment cannot be resolved.
//!
//! # Crate Structure
//!
//! - [`coordinate`] - Coordinate parsing and batch rules
//! - [`identifier`] - Identifier-vs-label classification and label normalization
//! - [`resolver`] - The coordinate resolution algorithm
//! - [`store`] - The [`SecretStore`] seam and the Connect HTTP client
//! - [`models`] - Vault, item, section and field shapes
//! - [`config`] - Connection parameters with environment fallback
//! - [`error`] - Error taxonomy
//! - [`crate::tracing`] - Logging setup and span names
//! - [`testing`] - In-memory store for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use oplookup_core::{ConnectClient, ConnectConfig, CoordinateResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectConfig::resolve(None, None)?;
//! let resolver = CoordinateResolver::new(ConnectClient::new(&config)?);
//! let password = resolver
//!     .resolve("Automation/MySQL Database/password", Some("Credentials"))
//!     .await?;
//! # let _ = password;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod coordinate;
pub mod error;
pub mod identifier;
pub mod models;
pub mod resolver;
pub mod store;
pub mod testing;
pub mod tracing;

pub use config::{ConnectConfig, HOST_ENV, TOKEN_ENV};
pub use coordinate::Coordinate;
pub use error::{
    ClientError, ClientResult, ConfigError, ConfigResult, LookupError, LookupResult, Segment,
};
pub use identifier::{Reference, is_valid_identifier, normalize_label};
pub use models::{Field, Item, ItemSummary, Section, SectionRef, Vault, VaultRef};
pub use resolver::{CoordinateResolver, find_field, resolve_section_id};
pub use store::{ConnectClient, SecretStore};
pub use crate::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized, span_names,
};
