//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record held by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(complex))]
pub struct Employee {
    /// Exposed as `ID!` through the complex resolver below
    #[cfg_attr(feature = "graphql", graphql(skip))]
    pub id: String,
    pub name: String,
    pub age: i32,
    /// Class / section label
    pub class: String,
    pub subjects: Vec<String>,
    /// Attendance percentage (0-100)
    pub attendance: Option<i32>,
    pub flagged: bool,
}

#[cfg(feature = "graphql")]
#[async_graphql::ComplexObject]
impl Employee {
    async fn id(&self) -> async_graphql::ID {
        async_graphql::ID(self.id.clone())
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub age: i32,
    pub class: String,
    pub subjects: Vec<String>,
    pub attendance: Option<i32>,
}

/// Update employee payload
///
/// `None` leaves the field untouched. `Some` is applied as-is, including
/// zero ages, zero attendance and empty subject lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub class: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub attendance: Option<i32>,
}

impl Employee {
    /// Build a new record from a create payload
    pub fn from_create(id: String, payload: EmployeeCreate) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age,
            class: payload.class,
            subjects: payload.subjects,
            attendance: payload.attendance,
            flagged: false,
        }
    }

    /// Apply every field present in `update`
    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(class) = update.class {
            self.class = class;
        }
        if let Some(subjects) = update.subjects {
            self.subjects = subjects;
        }
        if let Some(attendance) = update.attendance {
            self.attendance = Some(attendance);
        }
    }
}
