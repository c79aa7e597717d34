//! 员工存储
//!
//! 进程内的员工列表。所有访问经过同一把读写锁：读操作取快照，
//! 写操作在单个写锁内完成，因此每次修改要么完整生效要么不生效。

use parking_lot::RwLock;
use shared::{Employee, EmployeeCreate, EmployeeQuery, EmployeeUpdate};

use super::list::apply_query;
use super::seed::seed_employees;

#[derive(Debug)]
struct Inner {
    employees: Vec<Employee>,
    /// 下一个分配的 id，只增不减
    next_id: u64,
}

/// 内存员工存储
#[derive(Debug)]
pub struct EmployeeStore {
    inner: RwLock<Inner>,
}

impl EmployeeStore {
    /// 使用给定记录创建
    ///
    /// 计数器从现有数字 id 的最大值之后开始。
    pub fn new(employees: Vec<Employee>) -> Self {
        let next_id = employees
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            inner: RwLock::new(Inner { employees, next_id }),
        }
    }

    /// 载入种子数据
    pub fn seeded() -> Self {
        Self::new(seed_employees())
    }

    /// 列表查询 (排序 + 分页)
    pub fn list(&self, query: &EmployeeQuery) -> Vec<Employee> {
        let snapshot = self.inner.read().employees.clone();
        apply_query(snapshot, query)
    }

    /// 按 id 查找
    pub fn get(&self, id: &str) -> Option<Employee> {
        self.inner
            .read()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// 新增员工，分配新 id，`flagged = false`
    pub fn create(&self, payload: EmployeeCreate) -> Employee {
        let mut inner = self.inner.write();
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let employee = Employee::from_create(id, payload);
        inner.employees.push(employee.clone());
        employee
    }

    /// 更新已提供的字段，id 不存在返回 `None`
    pub fn update(&self, id: &str, update: EmployeeUpdate) -> Option<Employee> {
        let mut inner = self.inner.write();
        let employee = inner.employees.iter_mut().find(|e| e.id == id)?;
        employee.apply(update);
        Some(employee.clone())
    }

    /// 删除并返回记录
    pub fn delete(&self, id: &str) -> Option<Employee> {
        let mut inner = self.inner.write();
        let index = inner.employees.iter().position(|e| e.id == id)?;
        Some(inner.employees.remove(index))
    }

    /// 切换 flagged 标记
    pub fn toggle_flag(&self, id: &str) -> Option<Employee> {
        let mut inner = self.inner.write();
        let employee = inner.employees.iter_mut().find(|e| e.id == id)?;
        employee.flagged = !employee.flagged;
        Some(employee.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.read().employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().employees.is_empty()
    }
}
