//! User Model

use super::role::Role;
use serde::{Deserialize, Serialize};

/// Login account (with password hash, never sent to clients)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub role: Role,
}

/// Successful login result
///
/// Exposed in GraphQL under the type name `User`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(name = "User", complex))]
pub struct LoginResponse {
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub id: String,
    pub username: String,
    pub role: Role,
    pub token: String,
}

#[cfg(feature = "graphql")]
#[async_graphql::ComplexObject]
impl LoginResponse {
    async fn id(&self) -> async_graphql::ID {
        async_graphql::ID(self.id.clone())
    }
}
