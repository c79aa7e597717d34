//! GraphQL 模块
//!
//! - [`QueryRoot`] - `employees`, `employee`
//! - [`MutationRoot`] - `login`, `addEmployee`, `updateEmployee`,
//!   `deleteEmployee`, `flagEmployee`
//!
//! 请求身份以 [`Identity`](crate::auth::Identity) 的形式附加在每个请求的
//! data 上；匿名请求不附加。

mod context;
pub mod mutation;
pub mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::core::ServerState;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The directory GraphQL schema
pub type DirectorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with shared server state
pub fn build_schema(state: ServerState) -> DirectorySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
