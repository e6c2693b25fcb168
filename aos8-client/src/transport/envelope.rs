//! Decoding of the device's JSON envelope.
//!
//! Both surfaces answer with
//! `{"result": {"diag": 200, "error": .., "output": .., "data": ..}}`.
//! Decoding never fails: a body that is not JSON is a normal failure mode
//! (the switch may be rebooting, or a proxy may answer with an HTML page)
//! and becomes a failed [`ApiResult`].

use serde_json::{Map, Value};

use crate::client::response::{ApiResult, ErrorDetail, Output};

/// Error message for bodies that are not JSON.
pub const NON_JSON_ERROR: &str = "Non-JSON response";

/// Decode an HTTP status and body into an [`ApiResult`].
pub fn decode_envelope(status: u16, body: &str) -> ApiResult {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => {
            return ApiResult::failed(i64::from(status), NON_JSON_ERROR)
                .with_output(Output::Text(body.to_string()));
        }
    };

    let mut result = match json {
        Value::Object(mut top) => match top.remove("result") {
            Some(Value::Object(result)) => result,
            _ => Map::new(),
        },
        _ => Map::new(),
    };

    // Only an integer diag counts; anything else reads as 0 and fails
    let diag = result.get("diag").and_then(Value::as_i64).unwrap_or(0);

    let mut decoded = ApiResult::new(diag);
    decoded.error = result.remove("error").and_then(ErrorDetail::from_json);
    decoded.output = result.remove("output").and_then(|output| match output {
        Value::Null => None,
        Value::String(text) => Some(Output::Text(text)),
        other => Some(Output::Json(other)),
    });
    decoded.data = result.remove("data").filter(|data| !data.is_null());
    decoded
}
