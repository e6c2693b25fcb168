//! Error types for aos8-client.
//!
//! Device-reported failures are not errors: a call that reaches the switch
//! always produces an [`ApiResult`](crate::ApiResult), even when the switch
//! says no. The types here cover everything that happens before or around
//! that exchange.

use std::time::Duration;

use thiserror::Error;

/// Main error type for aos8-client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Login errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Caller input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Client builder errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Transport layer errors (connection, TLS, timeouts).
///
/// No device envelope exists for any of these, so they cannot be turned
/// into an `ApiResult`.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be completed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The base URL or a request path did not form a valid URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    /// The transport was closed with `close()`
    #[error("Transport closed")]
    Closed,
}

impl TransportError {
    /// Classify a reqwest error, pulling timeouts out into their own variant.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else {
            TransportError::Http(err)
        }
    }
}

/// Login failures. Fatal to client construction.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The login endpoint answered with a non-200 status
    #[error("Login failed for user '{user}' with HTTP status {status}")]
    BadStatus { user: String, status: u16 },

    /// The login endpoint answered 200 but never set the session cookie
    #[error("Login succeeded for user '{user}' but no 'wv_sess' session cookie was set")]
    MissingSessionCookie { user: String },
}

/// Caller input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A port or port range string could not be parsed
    #[error("Invalid port range '{input}': {reason}")]
    InvalidPortRange { input: String, reason: String },

    /// A value is not one of the accepted choices
    #[error("Invalid {field} '{value}': choose from {allowed}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// A numeric parameter is outside its accepted range
    #[error("{field} {value} out of range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A required value was empty
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// A value contains a character the command syntax cannot carry
    #[error("{field} must not contain {character:?}")]
    InvalidCharacter { field: &'static str, character: char },
}

/// Invalid configuration in the client builder.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required builder field was never set
    #[error("{field} is required")]
    Missing { field: &'static str },
}

/// Result type alias using aos8-client's Error.
pub type Result<T> = std::result::Result<T, Error>;
