//! User-visible message for a failed prediction call.

use serde_json::Value;

pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while making the prediction. Please try again.";

/// Pick the message for an error body: validation details first, then the
/// `error` string, then the generic retry prompt.
pub fn error_message(body: &Value) -> String {
    if let Some(details) = body.get("details").filter(|d| !d.is_null()) {
        return format!("Validation error: {}", details);
    }

    match body.get("error").and_then(Value::as_str) {
        Some(error) if !error.is_empty() => error.to_string(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
