//! Employee list query options

use serde::{Deserialize, Serialize};

/// Sortable employee field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Name,
    Age,
    Class,
    Subjects,
    Attendance,
    Flagged,
}

impl SortField {
    /// Parse a client-supplied field name
    ///
    /// Returns `None` for `"none"` and for anything that is not an employee
    /// field, in which case the list keeps insertion order.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "age" => Some(SortField::Age),
            "class" => Some(SortField::Class),
            "subjects" => Some(SortField::Subjects),
            "attendance" => Some(SortField::Attendance),
            "flagged" => Some(SortField::Flagged),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"asc"` sorts ascending; every other value sorts descending
    pub fn parse(order: &str) -> Self {
        if order == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// Options for listing employees
///
/// `limit == 0` means "no limit" and also disables `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeQuery {
    pub limit: usize,
    pub offset: usize,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl EmployeeQuery {
    /// Build from raw GraphQL arguments
    ///
    /// Missing values take the defaults `limit=0, offset=0, sortBy="none",
    /// sortOrder="asc"`. Negative numbers are treated as 0.
    pub fn from_args(
        limit: Option<i32>,
        offset: Option<i32>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        Self {
            limit: limit.unwrap_or(0).max(0) as usize,
            offset: offset.unwrap_or(0).max(0) as usize,
            sort_by: sort_by.and_then(SortField::parse),
            sort_order: sort_order.map(SortOrder::parse).unwrap_or_default(),
        }
    }
}
