//! Error types

use super::codes::ErrorCode;
use thiserror::Error;

/// Application error with a structured error code
///
/// `message` is surfaced to GraphQL callers verbatim; `code` travels in the
/// error extensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Bad username or password at login
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Caller is anonymous or lacks the ADMIN role
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::PermissionDenied)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// GraphQL error conversion
///
/// Resolvers call `err.extend()` so the numeric code lands in
/// `extensions.code` next to the verbatim message.
#[cfg(feature = "graphql")]
impl async_graphql::ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = i32::from(self.code.code());
        async_graphql::Error::new(self.message.clone()).extend_with(|_, e| e.set("code", code))
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        assert_eq!(AppError::invalid_credentials().to_string(), "Invalid credentials");
        assert_eq!(AppError::unauthorized().to_string(), "Unauthorized");
    }

    #[test]
    fn test_custom_message_keeps_code() {
        let err = AppError::internal("password hashing failed");
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "password hashing failed");
    }
}
