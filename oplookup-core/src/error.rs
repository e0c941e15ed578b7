//! Error types for `oplookup`
//!
//! This module defines the error hierarchy using `thiserror`:
//! - [`LookupError`] is what coordinate resolution returns to callers
//! - [`ClientError`] is what the secret store client returns
//! - [`ConfigError`] covers connection parameter problems

use std::fmt;

use thiserror::Error;

/// The part of a coordinate that failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The vault segment (`<vault>/...`)
    Vault,
    /// The item segment (`.../<item>/...`)
    Item,
    /// The optional section qualifier
    Section,
    /// The field segment (`.../<field>`)
    Field,
}

impl Segment {
    /// Returns the lowercase name used in error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vault => "vault",
            Self::Item => "item",
            Self::Section => "section",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::ref_option)]
fn fmt_context(context: &Option<String>) -> String {
    context.as_deref().map(|c| format!(" {c}")).unwrap_or_default()
}

/// Errors returned by coordinate resolution
#[derive(Debug, Error)]
pub enum LookupError {
    /// The coordinate does not split into `<vault>/<item>/<field>`
    #[error("Secret coordinate must follow the pattern <vault>/<item>/<field>. Got '{0}'")]
    MalformedCoordinate(String),

    /// More than one coordinate was supplied to a single lookup
    #[error("Only one coordinate can be looked up per call, got {0}")]
    UnsupportedBatch(usize),

    /// A segment of the coordinate could not be resolved
    #[error("{segment} '{reference}' not found{}", fmt_context(.context))]
    NotFound {
        /// Which segment failed
        segment: Segment,
        /// The reference value (identifier or label) supplied for it
        reference: String,
        /// Optional location hint, e.g. "in item 'MySQL Database'"
        context: Option<String>,
    },

    /// The item exists but carries no fields at all
    #[error("item '{0}' has no fields")]
    NoFields(String),

    /// The underlying service call failed while resolving a segment
    #[error("{segment} '{reference}': secret store request failed: {source}")]
    Transport {
        /// Which segment was being resolved
        segment: Segment,
        /// The reference value supplied for it
        reference: String,
        /// The client failure
        #[source]
        source: ClientError,
    },
}

impl LookupError {
    /// Creates a `NotFound` error without location context
    #[must_use]
    pub fn not_found(segment: Segment, reference: impl Into<String>) -> Self {
        Self::NotFound {
            segment,
            reference: reference.into(),
            context: None,
        }
    }

    /// Creates a `NotFound` error scoped to a location
    #[must_use]
    pub fn not_found_in(
        segment: Segment,
        reference: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            segment,
            reference: reference.into(),
            context: Some(context.into()),
        }
    }

    /// Maps a client error for the given segment.
    ///
    /// A client-level not-found becomes [`LookupError::NotFound`] naming the
    /// segment; everything else is a transport failure.
    #[must_use]
    pub fn from_client(err: ClientError, segment: Segment, reference: &str) -> Self {
        match err {
            ClientError::NotFound(_) => Self::not_found(segment, reference),
            source => Self::Transport {
                segment,
                reference: reference.to_string(),
                source,
            },
        }
    }

    /// Returns true for any of the not-found variants
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoFields(_))
    }
}

/// Errors returned by the secret store client.
///
/// Raw response bodies are never carried in these errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The requested resource does not exist
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server rejected the request as malformed (HTTP 400)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Bearer token missing or invalid (HTTP 401)
    #[error("authentication failed (check the Connect token)")]
    Unauthorized,

    /// Token lacks access to the resource (HTTP 403)
    #[error("access denied to {0}")]
    Forbidden(String),

    /// Connect server error (HTTP 5xx)
    #[error("Connect server error: status {0}")]
    Server(u16),

    /// Any other non-success status
    #[error("unexpected Connect response: status {0}")]
    UnexpectedStatus(u16),

    /// The request could not be sent or the connection failed
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("failed to decode Connect response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Maps an HTTP status code to an error for the given resource
    #[must_use]
    pub fn from_status(status: u16, resource: &str) -> Self {
        match status {
            400 => Self::BadRequest(resource.to_string()),
            401 => Self::Unauthorized,
            403 => Self::Forbidden(resource.to_string()),
            404 => Self::NotFound(resource.to_string()),
            500..=599 => Self::Server(status),
            other => Self::UnexpectedStatus(other),
        }
    }
}

/// Errors in connection parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No host given and the environment fallback is unset
    #[error("Connect host is not set (pass --host or set {0})")]
    MissingHost(&'static str),

    /// No token given and the environment fallback is unset
    #[error("Connect token is not set (pass --token or set {0})")]
    MissingToken(&'static str),

    /// The host is not an http(s) URL
    #[error("Invalid Connect host '{0}': must start with http:// or https://")]
    InvalidHost(String),
}

/// Result type for lookup operations
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Result type for secret store client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
