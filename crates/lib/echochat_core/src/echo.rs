//! The echo transformation and its input validation.

use serde_json::Value;
use thiserror::Error;

use crate::models::ChatResponse;

/// Body text of the 400 reply.
pub const VALIDATION_ERROR_MESSAGE: &str =
    "Message parameter is required and must be a non-empty string.";

/// Body text of the 500 reply.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EchoError {
    /// `message` is missing, not a string, or blank after trimming.
    #[error("{}", VALIDATION_ERROR_MESSAGE)]
    InvalidMessage,
}

/// Wraps `message` in the fixed reply template. The input is used as-is.
pub fn echo_reply(message: &str) -> String {
    format!("You said: '{message}'")
}

/// Returns true when `text` has something other than whitespace.
pub fn is_submittable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Extracts the `message` field from an untyped request body.
pub fn validate_message(body: &Value) -> Result<&str, EchoError> {
    match body.get("message").and_then(Value::as_str) {
        Some(message) if is_submittable(message) => Ok(message),
        _ => Err(EchoError::InvalidMessage),
    }
}

/// Validates an untyped body and produces the reply.
pub fn handle(body: &Value) -> Result<ChatResponse, EchoError> {
    let message = validate_message(body)?;
    Ok(ChatResponse {
        bot_response: echo_reply(message),
    })
}
