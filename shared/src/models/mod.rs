//! Data models
//!
//! Shared between the directory server and its clients (via the GraphQL API).
//! GraphQL output types use `#[cfg_attr(feature = "graphql", derive(...))]`.
//! All IDs are decimal strings.

pub mod employee;
pub mod role;
pub mod user;

// Re-exports
pub use employee::*;
pub use role::*;
pub use user::*;
