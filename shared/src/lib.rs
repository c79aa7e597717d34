//! Shared types for the employee directory
//!
//! Domain models, list query options and the unified error system used by
//! the directory server and its clients.

pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeCreate, EmployeeUpdate, LoginResponse, Role, User};
pub use query::{EmployeeQuery, SortField, SortOrder};
pub use serde::{Deserialize, Serialize};
