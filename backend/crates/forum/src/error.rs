//! Forum Error Types
//!
//! Forum-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Note the taxonomy split: validation problems and failed log-ins are NOT
//! errors here — they are ordinary outcomes rendered inline or as a soft
//! redirect. This enum covers what actually fails a request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Forum-specific result type alias
pub type ForumResult<T> = Result<T, ForumError>;

/// Forum-specific error variants
#[derive(Debug, Error)]
pub enum ForumError {
    /// Session token malformed, tampered with, or pointing nowhere
    #[error("Session not found or invalid")]
    SessionInvalid,

    /// An operation that dereferences the current user ran without one.
    /// The legacy upgrade-status handler crashed here; we keep the 500.
    #[error("No current identity")]
    NoIdentity,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] platform::password::PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ForumError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ForumError::SessionInvalid => StatusCode::UNAUTHORIZED,
            ForumError::NoIdentity
            | ForumError::PasswordHash(_)
            | ForumError::Database(_)
            | ForumError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForumError::SessionInvalid => ErrorKind::Unauthorized,
            ForumError::NoIdentity
            | ForumError::PasswordHash(_)
            | ForumError::Database(_)
            | ForumError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ForumError::Database(e) => {
                tracing::error!(error = %e, "Forum database error");
            }
            ForumError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            ForumError::Internal(msg) => {
                tracing::error!(message = %msg, "Forum internal error");
            }
            ForumError::NoIdentity => {
                tracing::error!("Operation requiring an identity ran without one");
            }
            ForumError::SessionInvalid => {
                tracing::debug!("Invalid session token presented");
            }
        }
    }
}

impl IntoResponse for ForumError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ForumError {
    fn from(err: AppError) -> Self {
        ForumError::Internal(err.to_string())
    }
}
