//! Builder for creating switch clients.

use std::time::Duration;

use super::AosClient;
use crate::error::{ConfigError, Result};
use crate::transport::HttpConfig;
use crate::transport::config::DEFAULT_TIMEOUT;

/// Builder for constructing an [`AosClient`].
///
/// # Example
///
/// ```rust,no_run
/// use aos8_client::ClientBuilder;
///
/// # async fn example() -> Result<(), aos8_client::Error> {
/// let mut client = ClientBuilder::new("https://192.168.70.1")
///     .username("admin")
///     .password("switch")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    verify_tls: bool,
    debug: bool,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new client builder for the switch at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: None,
            password: None,
            verify_tls: false,
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the username for authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password for authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Verify the switch's TLS certificate (default: false).
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Log request and response bodies at debug level (default: false).
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the per-request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the settings into an [`HttpConfig`].
    pub fn into_config(self) -> Result<HttpConfig> {
        if self.base_url.trim().trim_end_matches('/').is_empty() {
            return Err(ConfigError::Missing { field: "base URL" }.into());
        }
        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing { field: "username" })?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::Missing { field: "password" })?;

        let mut config = HttpConfig::new(self.base_url, username, password);
        config.verify_tls = self.verify_tls;
        config.debug = self.debug;
        config.timeout = self.timeout;
        Ok(config)
    }

    /// Build the client.
    ///
    /// This logs in immediately. A login failure is returned as an error
    /// and no client is created.
    pub async fn build(self) -> Result<AosClient> {
        AosClient::connect(self.into_config()?).await
    }
}
