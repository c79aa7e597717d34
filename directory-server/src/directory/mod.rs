//! 员工目录模块
//!
//! - [`EmployeeStore`] - 加锁的内存员工列表
//! - [`apply_query`] - 排序与分页

pub mod list;
pub mod seed;
pub mod store;

pub use list::apply_query;
pub use seed::seed_employees;
pub use store::EmployeeStore;
