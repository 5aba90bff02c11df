/*
 * Responsibility
 * - App-wide ApiError / AppError definitions
 * - IntoResponse (HTTP status + JSON error body `{"error": {message, code, request_id?}}`)
 * - Converts auth errors into the client-facing code table
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;

/// Error codes exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unauthorized,
    InvalidCredentials,
    MissingAuthHeader,
    InvalidToken,
    ExpiredToken,
    Forbidden,
    #[serde(rename = "INSUFFICIENT_PERMISSIONS")]
    InsufficientPerms,
    ValidationFailed,
    InvalidInput,
    InvalidFormat,
    NotFound,
    AlreadyExists,
    InternalError,
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingAuthHeader => "MISSING_AUTH_HEADER",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::InsufficientPerms => "INSUFFICIENT_PERMISSIONS",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { code: ErrorCode, message: String },
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    InvalidToken(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("Forbidden: insufficient permissions")]
    InsufficientPermissions,
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    #[error("{0}")]
    Conflict(String),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: ErrorCode::InvalidInput,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) | AppError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::InvalidToken(_) => ErrorCode::InvalidToken,
            AppError::Forbidden(_) => ErrorCode::Forbidden,
            AppError::InsufficientPermissions => ErrorCode::InsufficientPerms,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::AlreadyExists,
            AppError::Internal => ErrorCode::InternalError,
        }
    }

    /// Attach the request correlation id for the response body.
    pub fn with_request_id(self, request_id: Option<String>) -> ApiError {
        ApiError {
            error: self,
            request_id,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // Header-level problems all surface as UNAUTHORIZED.
            AuthError::MissingHeader
            | AuthError::MissingToken
            | AuthError::InvalidFormat
            | AuthError::Unauthorized => AppError::Unauthorized(e.to_string()),
            AuthError::InvalidToken(_) | AuthError::InvalidClaims(_) => {
                AppError::InvalidToken(e.to_string())
            }
            AuthError::InsufficientPermissions => AppError::InsufficientPermissions,
        }
    }
}

/// AppError + request id. This is what middleware and extractors return.
#[derive(Debug)]
pub struct ApiError {
    pub error: AppError,
    pub request_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                message: self.error.to_string(),
                code: self.error.code(),
                request_id: self.request_id,
            },
        };

        (self.error.status(), Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.with_request_id(None).into_response()
    }
}
