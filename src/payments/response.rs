//! Read-only helpers over OPay response bodies
//!
//! The client returns every decoded body unchanged, including vendor failures.
//! These helpers let callers inspect the vendor envelope
//! (`{"code": ..., "message": ..., "data": ...}`) without the client doing so.

use serde_json::Value;

/// Code the vendor returns for a successful call.
pub const SUCCESS_CODE: &str = "00000";

pub fn response_code(body: &Value) -> Option<&str> {
    body.get("code").and_then(Value::as_str)
}

pub fn response_message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str)
}

pub fn is_success(body: &Value) -> bool {
    response_code(body) == Some(SUCCESS_CODE)
}

/// The `data` member of the envelope, if present and not null.
pub fn data(body: &Value) -> Option<&Value> {
    body.get("data").filter(|v| !v.is_null())
}
