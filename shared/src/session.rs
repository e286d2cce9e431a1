//! 会话模型
//!
//! token 与角色保存在持久化的键值存储中（浏览器中为 localStorage）。
//! 存储通过 [`SessionStorage`] 抽象，便于在测试中替换。

use crate::{STORAGE_ROLE_KEY, STORAGE_TOKEN_KEY};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

// =========================================================
// 抽象接口定义
// =========================================================

pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

// =========================================================
// 会话状态
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>, role: Option<String>) -> Self {
        Self {
            token: non_empty(token),
            role: non_empty(role),
        }
    }

    /// 从存储中恢复会话
    pub fn load<S: SessionStorage + ?Sized>(storage: &S) -> Self {
        Self::new(storage.get(STORAGE_TOKEN_KEY), storage.get(STORAGE_ROLE_KEY))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// 登录成功后写入会话
    pub fn start<S: SessionStorage + ?Sized>(
        &mut self,
        storage: &S,
        token: String,
        role: Option<String>,
    ) {
        *self = Self::new(Some(token), role);
        match &self.token {
            Some(token) => storage.set(STORAGE_TOKEN_KEY, token),
            None => storage.delete(STORAGE_TOKEN_KEY),
        };
        match &self.role {
            Some(role) => storage.set(STORAGE_ROLE_KEY, role),
            None => storage.delete(STORAGE_ROLE_KEY),
        };
    }

    /// 服务端返回 401 时只清除 token
    pub fn expire<S: SessionStorage + ?Sized>(&mut self, storage: &S) {
        self.token = None;
        storage.delete(STORAGE_TOKEN_KEY);
    }

    /// 注销：清除 token 和角色
    pub fn clear<S: SessionStorage + ?Sized>(&mut self, storage: &S) {
        self.token = None;
        self.role = None;
        storage.delete(STORAGE_TOKEN_KEY);
        storage.delete(STORAGE_ROLE_KEY);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// =========================================================
// 内存实现（测试用）
// =========================================================

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    data: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.data.borrow_mut().remove(key).is_some()
    }
}
