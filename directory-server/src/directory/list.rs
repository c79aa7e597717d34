//! 列表排序与分页

use std::cmp::Ordering;

use shared::{Employee, EmployeeQuery, SortField, SortOrder};

/// 按字段比较两个员工
///
/// `id` 按字符串比较，与客户端看到的值一致。
fn compare_by(field: SortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Class => a.class.cmp(&b.class),
        SortField::Subjects => a.subjects.cmp(&b.subjects),
        SortField::Attendance => a.attendance.cmp(&b.attendance),
        SortField::Flagged => a.flagged.cmp(&b.flagged),
    }
}

/// 对快照排序并截取分页
///
/// 稳定排序：键相同的记录保持插入顺序。`limit == 0` 返回整个列表并忽略 `offset`。
pub fn apply_query(mut employees: Vec<Employee>, query: &EmployeeQuery) -> Vec<Employee> {
    if let Some(field) = query.sort_by {
        employees.sort_by(|a, b| match query.sort_order {
            SortOrder::Asc => compare_by(field, a, b),
            SortOrder::Desc => compare_by(field, b, a),
        });
    }

    if query.limit == 0 {
        return employees;
    }

    employees
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .collect()
}
