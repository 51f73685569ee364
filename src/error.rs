// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::database::store::StoreError;

/// A single violated validation rule, in declaration order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request, reporting only the first violated field (registration contract)
    ValidationFirst(FieldError),

    // 400 Bad Request, reporting every violated field
    Validation(Vec<FieldError>),

    // 400 Bad Request
    Conflict(String),

    // 400 Bad Request, deliberately identical for unknown email and wrong password
    InvalidCredentials,

    // 401 Unauthorized, missing or unverifiable token
    Unauthenticated,

    // 401 Unauthorized, authenticated caller does not own the resource
    NotAuthorized,

    // 404 Not Found
    NotFound(&'static str),

    // 500 Internal Server Error; source is logged, only `message` reaches the client
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFirst(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotAuthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::ValidationFirst(err) => err.message,
            ApiError::Validation(_) => "Validation failed",
            ApiError::Conflict(msg) => msg,
            ApiError::InvalidCredentials => "Invalid credentials",
            ApiError::Unauthenticated => "Please authenticate using a valid token",
            ApiError::NotAuthorized => "Not authorized",
            ApiError::NotFound(msg) => msg,
            ApiError::Internal { message, .. } => message,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(errors) => json!({
                "success": false,
                "errors": errors,
            }),
            _ => json!({
                "success": false,
                "error": self.message(),
            }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn not_found(message: &'static str) -> Self {
        ApiError::NotFound(message)
    }

    pub fn internal(message: &'static str, source: anyhow::Error) -> Self {
        ApiError::Internal { message, source }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal("Internal server error", err.into())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Internal { message, source } = &self {
            tracing::error!("internal error ({}): {:#}", message, source);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
