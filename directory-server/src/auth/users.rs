//! 用户存储
//!
//! 固定的种子用户表，运行期间只读。

use shared::{Role, User};

use super::password::{hash_password, verify_password};

/// 种子用户: (id, username, password, role)
const SEED_USERS: &[(&str, &str, &str, Role)] = &[
    ("1", "admin", "admin123", Role::Admin),
    ("2", "employee", "employee123", Role::Employee),
];

/// 只读用户表
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// 使用种子用户创建，启动时计算密码哈希
    pub fn seeded() -> Result<Self, argon2::password_hash::Error> {
        let users = SEED_USERS
            .iter()
            .map(|(id, username, password, role)| {
                Ok(User {
                    id: id.to_string(),
                    username: username.to_string(),
                    password_hash: hash_password(password)?,
                    role: *role,
                })
            })
            .collect::<Result<Vec<_>, argon2::password_hash::Error>>()?;

        Ok(Self { users })
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// 校验用户名和密码
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.find_by_username(username)
            .filter(|user| verify_password(password, &user.password_hash))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users() {
        let store = UserStore::seeded().unwrap();
        assert_eq!(store.len(), 2);

        let admin = store.find_by_username("admin").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_ne!(admin.password_hash, "admin123");
    }

    #[test]
    fn test_authenticate() {
        let store = UserStore::seeded().unwrap();

        assert_eq!(
            store.authenticate("employee", "employee123").map(|u| u.id.as_str()),
            Some("2")
        );
        assert!(store.authenticate("employee", "admin123").is_none());
        assert!(store.authenticate("nobody", "admin123").is_none());
    }
}
