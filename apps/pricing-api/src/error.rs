//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Pricing API                        │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /api/calculate                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Json<T>, ApiError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad body shape? ─── ApiError::invalid_request ────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Rule broken? ─── CoreError::Validation ──────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  400 { "error": "Coupon percentage must be between 0 and 100.",        │
//! │        "code": "VALIDATION_ERROR" }                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The status code is chosen from the error's type, never from its text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pricewise_core::CoreError;
use serde::Serialize;

/// API error returned from handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "error": "Item #2 quantity must be an integer >= 1.",
///   "code": "VALIDATION_ERROR"
/// }
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A business rule rejected the input (400)
    ValidationError,

    /// Body is not the expected JSON shape (400)
    InvalidRequest,

    /// Body exceeds the configured size limit (413)
    PayloadTooLarge,

    /// A monetary figure left the supported range (422)
    AmountOutOfRange,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::AmountOutOfRange => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a malformed-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            e @ CoreError::AmountOutOfRange { .. } => {
                ApiError::new(ErrorCode::AmountOutOfRange, e.to_string())
            }
            e => {
                tracing::error!("Unexpected core error: {}", e);
                ApiError::internal("Internal error.")
            }
        }
    }
}

/// Wire shape of an error response.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: ErrorCode,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
            code: self.code,
        };
        (self.code.status(), Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pricewise_core::ValidationError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ErrorCode::AmountOutOfRange.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ErrorCode::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::from(ValidationError::ItemQuantity { index: 2 }).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Item #2 quantity must be an integer >= 1.");

        let err: ApiError = CoreError::AmountOutOfRange { figure: "subtotal" }.into();
        assert_eq!(err.code, ErrorCode::AmountOutOfRange);
        assert_eq!(err.message, "Cart subtotal exceeds the supported range.");
    }

    #[test]
    fn test_code_serializes_screaming_snake() {
        let json = serde_json::to_value(ErrorCode::ValidationError).unwrap();
        assert_eq!(json, "VALIDATION_ERROR");
        let json = serde_json::to_value(ErrorCode::AmountOutOfRange).unwrap();
        assert_eq!(json, "AMOUNT_OUT_OF_RANGE");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::invalid_request("Invalid JSON body.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
