//! The API error envelope.
//!
//! Failed requests return a JSON body of the form
//! `{"error": {"type": ..., "message": ...}}`. These types decode that
//! envelope so transport code can surface the service's own diagnostics
//! instead of an opaque status code.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Top-level error envelope wrapping an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// The error details.
    pub error: ApiError,
}

/// Error categories the API reports in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Internal failure on the service's side.
    ApiError,
    /// The request never reached the service intact.
    ApiConnectionError,
    /// The API key is missing or invalid.
    AuthenticationError,
    /// The card could not be charged (declined, expired, bad CVC, ...).
    CardError,
    /// The request has invalid parameters.
    InvalidRequestError,
    /// Too many requests hit the API too quickly.
    RateLimitError,
    /// A category these bindings do not know about yet.
    #[serde(other)]
    Unknown,
}

impl ErrorType {
    /// Returns the wire name for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiError => "api_error",
            Self::ApiConnectionError => "api_connection_error",
            Self::AuthenticationError => "authentication_error",
            Self::CardError => "card_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::RateLimitError => "rate_limit_error",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error object as returned inside the [`ErrorPayload`] envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category.
    #[serde(rename = "type")]
    pub error_type: ErrorType,

    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Machine-readable code for card errors (e.g. `"card_declined"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The request parameter the error relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,

    /// Identifier of the failed charge, for card errors on charges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        if let Some(param) = &self.param {
            write!(f, " (param: {param})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_deserialize_card_error() {
        let json = r#"{
            "error": {
                "type": "card_error",
                "message": "Your card was declined.",
                "code": "card_declined",
                "charge": "ch_16YQnnGLwndkPqS2vVbkclhn"
            }
        }"#;

        let payload: ErrorPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.error.error_type, ErrorType::CardError);
        assert_eq!(
            payload.error.message.as_deref(),
            Some("Your card was declined.")
        );
        assert_eq!(payload.error.code.as_deref(), Some("card_declined"));
        assert_eq!(payload.error.param, None);
    }

    #[test]
    fn test_error_payload_deserialize_invalid_request() {
        let json = r#"{
            "error": {
                "type": "invalid_request_error",
                "message": "No such token: tok_nope",
                "param": "token"
            }
        }"#;

        let payload: ErrorPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.error.error_type, ErrorType::InvalidRequestError);
        assert_eq!(payload.error.param.as_deref(), Some("token"));
    }

    #[test]
    fn test_error_type_unknown_category() {
        let json = r#"{"error": {"type": "idempotency_error"}}"#;
        let payload: ErrorPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.error.error_type, ErrorType::Unknown);
    }

    #[test]
    fn test_error_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ErrorType::CardError).unwrap(),
            "\"card_error\""
        );
        assert_eq!(ErrorType::RateLimitError.as_str(), "rate_limit_error");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            error_type: ErrorType::CardError,
            message: Some("Your card was declined.".to_owned()),
            code: Some("card_declined".to_owned()),
            param: None,
            charge: None,
        };
        assert_eq!(
            err.to_string(),
            "card_error: Your card was declined. (code: card_declined)"
        );
    }
}
