//! HTTP connection configuration.

use std::time::Duration;

use secrecy::SecretString;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Media type the AOS REST server answers with.
pub const ACCEPT: &str = "application/vnd.alcatellucentaos+json";

/// Name of the session cookie set by a successful login.
pub const SESSION_COOKIE: &str = "wv_sess";

/// HTTP connection configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the switch, without a trailing slash.
    pub base_url: String,

    /// Username for authentication.
    pub username: String,

    /// Password for authentication.
    pub password: SecretString,

    /// Verify the switch's TLS certificate.
    pub verify_tls: bool,

    /// Log request and response bodies at debug level.
    pub debug: bool,

    /// Timeout for each HTTP call.
    pub timeout: Duration,

    /// User-Agent header value.
    pub user_agent: String,
}

impl HttpConfig {
    /// Create a configuration with default TLS, debug and timeout settings.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            username: username.into(),
            password: SecretString::from(password.into()),
            verify_tls: false,
            debug: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("aos8-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Full URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Strip trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
