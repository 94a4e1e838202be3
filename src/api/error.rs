//! Error kinds surfaced by the API client and the page workflows.

use serde_json::Value;
use thiserror::Error;

/// Shown when a server error carries no usable detail.
pub const GENERIC_SERVER_MESSAGE: &str = "Something went wrong on the server. Please try again.";

/// Authorization failure of a call that carried a token, with no server detail.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Authorization failure with neither a token nor a server detail.
pub const NOT_AUTHORIZED_MESSAGE: &str = "You are not authorized to do that.";

/// Shown for every network failure.
pub const GENERIC_NETWORK_MESSAGE: &str =
    "Could not reach the server. Check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A required local field is missing or malformed. No request was made.
    #[error("{0}")]
    Validation(String),

    /// The request never reached the server, or no response came back.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the credentials (401/403).
    #[error("not authorized: {0}")]
    Authorization(String),

    /// Non-2xx response, a 2xx carrying an `error` field, or an undecodable body.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Text for the page banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Network(_) => GENERIC_NETWORK_MESSAGE.to_string(),
            ApiError::Authorization(message) if message.is_empty() => {
                NOT_AUTHORIZED_MESSAGE.to_string()
            }
            ApiError::Authorization(message) | ApiError::Server { message, .. } => message.clone(),
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, ApiError::Authorization(_))
    }
}

/// Pull a human readable message out of an error body.
///
/// FastAPI puts it in `detail` (a string, or a list of `{msg}` for request
/// validation); hand-written handlers use `message` or `error`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    match object.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            if let Some(msg) = items
                .iter()
                .find_map(|item| item.get("msg").and_then(Value::as_str))
            {
                return Some(msg.to_string());
            }
        }
        _ => {}
    }

    ["message", "error"].iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// A 2xx body that still reports failure (`{"error": "Campaign not found"}`).
pub fn embedded_error(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.as_object()?.get("error")?;
    if error.is_null() {
        return None;
    }
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string);
    let fallback = match error {
        Value::String(s) if s.trim().is_empty() => GENERIC_SERVER_MESSAGE.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(message.unwrap_or(fallback))
}
