//! Application error types with Axum response mapping.
//!
//! Two distinct surfaces: `AppError` maps programmatic failures to an
//! HTTP status + JSON body, while `LoginErrorCode` is the fixed
//! vocabulary carried back to the login prompt as a query parameter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::session::CallbackError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    AuthRequired,

    #[error("{0}")]
    BadRequest(String),

    #[error("API key not configured")]
    ApiKeyMissing,

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::AuthRequired => (
                StatusCode::UNAUTHORIZED,
                json!({"error": "Authentication required"}),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({"error": msg})),
            AppError::ApiKeyMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "API key not configured"}),
            ),
            AppError::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                json!({"error": format!("Upstream request failed: {}", msg)}),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": msg})),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Error codes attached to the login prompt as `?error=<code>`.
///
/// Each code maps to a fixed user-facing message; unknown codes render
/// the `Default` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginErrorCode {
    AuthFailed,
    ServerError,
    NotAuthorized,
    CallbackFailed,
    Default,
}

impl LoginErrorCode {
    pub fn from_param(code: &str) -> Self {
        match code {
            "AuthFailed" => Self::AuthFailed,
            "ServerError" => Self::ServerError,
            "NotAuthorized" => Self::NotAuthorized,
            "CallbackFailed" => Self::CallbackFailed,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthFailed => "AuthFailed",
            Self::ServerError => "ServerError",
            Self::NotAuthorized => "NotAuthorized",
            Self::CallbackFailed => "CallbackFailed",
            Self::Default => "Default",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AuthFailed => "Authentication failed. Please try again.",
            Self::ServerError => "Server error occurred. Please try again later.",
            Self::NotAuthorized => "You are not authorized to access this resource.",
            Self::CallbackFailed | Self::Default => "An error occurred. Please try again.",
        }
    }
}

impl From<CallbackError> for LoginErrorCode {
    fn from(err: CallbackError) -> Self {
        match err {
            CallbackError::MissingPayload => Self::AuthFailed,
            CallbackError::Undecodable => Self::CallbackFailed,
        }
    }
}
