//! LocalStorage 封装模块
//!
//! 通过 `gloo-storage` 实现共享层的 [`SessionStorage`] 接口。
//! 值按原始字符串读写，不经过 JSON 编码，与其他页面写入的令牌互通。

use busbook_shared::SessionStorage;
use gloo_storage::{LocalStorage, Storage};

/// 浏览器本地存储
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn delete(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
