//! Connection configuration for the 1Password Connect server
//!
//! Host and token come from caller options first and fall back to the
//! `OP_CONNECT_HOST` / `OP_CONNECT_TOKEN` environment variables.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the Connect server URL
pub const HOST_ENV: &str = "OP_CONNECT_HOST";

/// Environment variable holding the Connect bearer token
pub const TOKEN_ENV: &str = "OP_CONNECT_TOKEN";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Parameters needed to talk to one Connect server
#[derive(Clone)]
pub struct ConnectConfig {
    host: String,
    token: SecretString,
    timeout: Duration,
}

impl ConnectConfig {
    /// Creates a configuration from an explicit host and token.
    ///
    /// A trailing `/` on the host is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] if the host is not an http(s) URL.
    pub fn new(host: &str, token: SecretString) -> ConfigResult<Self> {
        let host = host.trim();
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(ConfigError::InvalidHost(host.to_string()));
        }
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Builds a configuration from options, falling back to the process
    /// environment for anything not supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if host or token is missing everywhere, or the host
    /// is invalid.
    pub fn resolve(host: Option<String>, token: Option<SecretString>) -> ConfigResult<Self> {
        Self::resolve_with(host, token, |key| std::env::var(key).ok())
    }

    /// Like [`ConnectConfig::resolve`], reading fallbacks through `lookup`
    /// instead of the process environment.
    ///
    /// # Errors
    ///
    /// See [`ConnectConfig::resolve`].
    pub fn resolve_with<F>(
        host: Option<String>,
        token: Option<SecretString>,
        lookup: F,
    ) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = host
            .filter(|h| !h.is_empty())
            .or_else(|| lookup(HOST_ENV).filter(|h| !h.is_empty()))
            .ok_or(ConfigError::MissingHost(HOST_ENV))?;
        let token = token
            .filter(|t| !t.expose_secret().is_empty())
            .or_else(|| {
                lookup(TOKEN_ENV)
                    .filter(|t| !t.is_empty())
                    .map(SecretString::from)
            })
            .ok_or(ConfigError::MissingToken(TOKEN_ENV))?;
        Self::new(&host, token)
    }

    /// Sets the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the server base URL without a trailing slash
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the bearer token
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }

    /// Returns the request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ConnectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectConfig")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
