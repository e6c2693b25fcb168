//! Result type shared by every device call.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::parse::{Record, Sections};

/// Diag code the device reports for a successful call.
pub const DIAG_OK: i64 = 200;

/// Outcome of one device call.
///
/// A call that reaches the switch always yields an `ApiResult`, whether the
/// switch accepted it or not. Check [`success`](Self::success) (or
/// [`is_success`](Self::is_success)) before using the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResult {
    /// True iff `diag` is 200.
    pub success: bool,

    /// Device diagnostic code (HTTP status for non-JSON bodies, 0 if absent).
    pub diag: i64,

    /// Error message(s) reported by the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,

    /// CLI-surface payload: raw text, or its normalized form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,

    /// MIB-surface payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResult {
    /// Create a result from a device diag code.
    pub fn new(diag: i64) -> Self {
        Self {
            success: diag == DIAG_OK,
            diag,
            error: None,
            output: None,
            data: None,
        }
    }

    /// Create a failed result with an error message.
    pub fn failed(diag: i64, error: impl Into<String>) -> Self {
        Self {
            success: false,
            diag,
            error: Some(ErrorDetail::Message(error.into())),
            output: None,
            data: None,
        }
    }

    /// Set the output payload.
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the data payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the error detail.
    pub fn with_error(mut self, error: ErrorDetail) -> Self {
        self.error = Some(error);
        self
    }

    /// Check if the device reported success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the raw CLI text, if the output has not been normalized.
    pub fn text(&self) -> Option<&str> {
        match &self.output {
            Some(Output::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Rewrite raw text output in place with a normalizer.
    ///
    /// Only `Output::Text` is rewritten; results without text output are
    /// left alone.
    pub fn normalize(&mut self, normalizer: Normalizer) {
        if let Some(Output::Text(text)) = &self.output {
            self.output = Some(normalizer(text));
        }
    }

    /// Consuming variant of [`normalize`](Self::normalize).
    pub fn normalized(mut self, normalizer: Normalizer) -> Self {
        self.normalize(normalizer);
        self
    }
}

/// Error detail as reported by the device: one message or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// A single message.
    Message(String),

    /// Several messages.
    Messages(Vec<String>),
}

impl ErrorDetail {
    /// Convert the envelope's `error` field, whatever JSON type it came as.
    pub(crate) fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(ErrorDetail::Message(s)),
            Value::Array(items) => Some(ErrorDetail::Messages(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            other => Some(ErrorDetail::Message(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Message(message) => write!(f, "{}", message),
            ErrorDetail::Messages(messages) => write!(f, "{}", messages.join("; ")),
        }
    }
}

/// CLI-surface payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Raw text as returned by the device.
    Text(String),

    /// Rows from a tabular normalizer.
    Table(Vec<Record>),

    /// A sectioned key/value document.
    Sections(Sections),

    /// One sectioned document per port.
    Details(Vec<Sections>),

    /// A non-string `output` value passed through from the envelope.
    Json(Value),
}

/// A pure text-to-structure transform applied to `Output::Text`.
pub type Normalizer = fn(&str) -> Output;

/// Normalizer for two-space tables.
pub fn table(text: &str) -> Output {
    Output::Table(crate::parse::parse_table(text))
}

/// Normalizer for `show interfaces status`.
pub fn interface_status(text: &str) -> Output {
    Output::Table(crate::parse::parse_interface_status(text))
}

/// Normalizer for `show ip interface`.
pub fn ip_interfaces(text: &str) -> Output {
    Output::Table(crate::parse::parse_ip_interfaces(text))
}

/// Normalizer for sectioned key/value output.
pub fn sections(text: &str) -> Output {
    Output::Sections(crate::parse::parse_sections(text))
}
