//! 启动时载入的员工数据

use shared::Employee;

/// (name, age, class, subjects, attendance)
const SEED_EMPLOYEES: &[(&str, i32, &str, &[&str], i32)] = &[
    ("Ravi", 28, "A", &["Math", "Physics"], 92),
    ("Kiran", 25, "B", &["Biology", "Chemistry"], 88),
    ("Suresh", 30, "C", &["English", "History"], 95),
    ("Anjali", 26, "A", &["Computer Science", "Mathematics"], 90),
    ("Vijay", 32, "B", &["Economics", "Statistics"], 90),
    ("Sunita", 29, "C", &["History", "Geography"], 88),
    ("Ramesh", 31, "A", &["Mechanical", "Physics"], 93),
    ("Priya", 27, "B", &["Biology", "Chemistry"], 91),
    ("Srinivas", 34, "C", &["English", "Literature"], 87),
    ("Lakshmi", 30, "A", &["Art", "Design"], 94),
];

/// 种子员工，id 从 "1" 开始连续编号
pub fn seed_employees() -> Vec<Employee> {
    SEED_EMPLOYEES
        .iter()
        .enumerate()
        .map(|(i, (name, age, class, subjects, attendance))| Employee {
            id: (i + 1).to_string(),
            name: name.to_string(),
            age: *age,
            class: class.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            attendance: Some(*attendance),
            flagged: false,
        })
        .collect()
}
