// Response envelope `{success, <payload>|error}`
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Every backend body, classified once.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `success: true`
    Success(Value),
    /// `success: false`; `message` comes from `error`
    Failure { message: String, body: Value },
    /// No boolean `success` field
    Raw(Value),
}

impl Envelope {
    pub fn from_value(body: Value) -> Self {
        match body.get("success").and_then(Value::as_bool) {
            Some(true) => Envelope::Success(body),
            Some(false) => Envelope::Failure {
                message: error_message(&body),
                body,
            },
            None => Envelope::Raw(body),
        }
    }

    /// Take `field` out of a success envelope.
    pub fn into_payload(self, field: &str) -> ClientResult<Value> {
        match self {
            Envelope::Success(mut body) => body
                .get_mut(field)
                .map(Value::take)
                .ok_or_else(|| ClientError::Envelope(format!("Response is missing `{}`", field))),
            Envelope::Failure { message, .. } => Err(ClientError::Envelope(message)),
            Envelope::Raw(_) => Err(ClientError::Envelope(
                "Response is not a success envelope".to_string(),
            )),
        }
    }

    /// The body exactly as received.
    pub fn into_body(self) -> Value {
        match self {
            Envelope::Success(body) | Envelope::Raw(body) => body,
            Envelope::Failure { body, .. } => body,
        }
    }
}

/// `error` may be a plain string or an object carrying `message`
pub(crate) fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string(),
        _ => "Unknown error".to_string(),
    }
}
