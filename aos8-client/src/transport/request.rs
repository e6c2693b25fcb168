//! Request description passed to a [`Transport`](super::Transport).

use reqwest::Method;

use crate::client::response::Normalizer;

/// Query parameters and form fields of a device request.
///
/// Both keep insertion order; the device does not care, but logs and tests
/// read better.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// URL query parameters.
    pub query: Vec<(String, String)>,

    /// Form-encoded body fields (POST/PUT).
    pub form: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a form field.
    pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        lookup(&self.query, key)
    }

    /// Look up a form field.
    pub fn form_value(&self, key: &str) -> Option<&str> {
        lookup(&self.form, key)
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// One device call: method, path relative to the base URL, and options.
///
/// Requests are plain data so the transport can replay them verbatim after
/// re-authenticating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRequest {
    pub method: Method,
    pub path: String,
    pub options: RequestOptions,
}

impl DeviceRequest {
    /// Create a request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replace the options.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

/// A read issued after a successful write, with an optional normalizer for
/// its text output.
#[derive(Debug, Clone)]
pub struct Refresh {
    pub request: DeviceRequest,
    pub normalizer: Option<Normalizer>,
}

impl Refresh {
    /// Refresh with a request whose result is returned as-is.
    pub fn raw(request: DeviceRequest) -> Self {
        Self {
            request,
            normalizer: None,
        }
    }

    /// Refresh with a request whose text output gets normalized.
    pub fn normalized(request: DeviceRequest, normalizer: Normalizer) -> Self {
        Self {
            request,
            normalizer: Some(normalizer),
        }
    }
}

impl From<DeviceRequest> for Refresh {
    fn from(request: DeviceRequest) -> Self {
        Self::raw(request)
    }
}
