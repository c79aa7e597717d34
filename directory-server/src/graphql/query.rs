//! GraphQL Query resolvers

use async_graphql::{Context, ID, Object, Result};
use shared::{Employee, EmployeeQuery};

use super::context::state;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List employees
    ///
    /// `limit = 0` (the default) returns every record and ignores `offset`.
    /// `sortBy` accepts any employee field name; `"none"` or an unknown field
    /// keeps insertion order. `sortOrder` is `"asc"` or anything else for
    /// descending.
    async fn employees(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        offset: Option<i32>,
        sort_by: Option<String>,
        sort_order: Option<String>,
    ) -> Result<Vec<Employee>> {
        let query = EmployeeQuery::from_args(
            limit,
            offset,
            sort_by.as_deref(),
            sort_order.as_deref(),
        );
        Ok(state(ctx)?.employees.list(&query))
    }

    /// Get a single employee by id
    async fn employee(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Employee>> {
        Ok(state(ctx)?.employees.get(id.as_str()))
    }
}
