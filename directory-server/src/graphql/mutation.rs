//! GraphQL Mutation resolvers
//!
//! Everything except `login` requires an ADMIN identity.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use shared::{Employee, EmployeeCreate, EmployeeUpdate, LoginResponse};

use super::context::{admin, state};

/// Null entries inside a `[String]` argument are dropped
fn collect_subjects(subjects: Vec<Option<String>>) -> Vec<String> {
    subjects.into_iter().flatten().collect()
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Exchange username/password for a signed token (valid for one hour)
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<LoginResponse> {
        state(ctx)?
            .auth
            .login(&username, &password)
            .map_err(|e| e.extend())
    }

    /// Append a new employee
    async fn add_employee(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
        class: String,
        subjects: Option<Vec<Option<String>>>,
        attendance: Option<i32>,
    ) -> Result<Employee> {
        let user = admin(ctx, "addEmployee")?;

        let employee = state(ctx)?.employees.create(EmployeeCreate {
            name,
            age,
            class,
            subjects: subjects.map(collect_subjects).unwrap_or_default(),
            attendance,
        });

        tracing::info!(employee_id = %employee.id, by = %user.id, "Employee created");
        Ok(employee)
    }

    /// Update the provided fields; omitted or null fields stay as they are
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        age: Option<i32>,
        class: Option<String>,
        subjects: Option<Vec<Option<String>>>,
        attendance: Option<i32>,
    ) -> Result<Option<Employee>> {
        let user = admin(ctx, "updateEmployee")?;

        let update = EmployeeUpdate {
            name,
            age,
            class,
            subjects: subjects.map(collect_subjects),
            attendance,
        };
        let employee = state(ctx)?.employees.update(id.as_str(), update);

        match &employee {
            Some(_) => tracing::info!(employee_id = %id.as_str(), by = %user.id, "Employee updated"),
            None => tracing::debug!(employee_id = %id.as_str(), "Update target not found"),
        }
        Ok(employee)
    }

    /// Remove an employee and return the removed record
    async fn delete_employee(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Employee>> {
        let user = admin(ctx, "deleteEmployee")?;

        let employee = state(ctx)?.employees.delete(id.as_str());
        if employee.is_some() {
            tracing::info!(employee_id = %id.as_str(), by = %user.id, "Employee deleted");
        }
        Ok(employee)
    }

    /// Toggle the `flagged` marker
    async fn flag_employee(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Employee>> {
        let user = admin(ctx, "flagEmployee")?;

        let employee = state(ctx)?.employees.toggle_flag(id.as_str());
        if let Some(emp) = &employee {
            tracing::info!(
                employee_id = %emp.id,
                flagged = emp.flagged,
                by = %user.id,
                "Employee flag toggled"
            );
        }
        Ok(employee)
    }
}
