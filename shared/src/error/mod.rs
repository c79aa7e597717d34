//! Unified error system for the employee directory
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`AppError`]: Error type carrying a code and a caller-facing message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::unauthorized();
//! assert_eq!(err.code, ErrorCode::PermissionDenied);
//! assert_eq!(err.to_string(), "Unauthorized");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
