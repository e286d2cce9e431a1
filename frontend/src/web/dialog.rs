//! 阻塞式对话框封装

use leptos::prelude::window;

pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

/// 用户取消或调用失败时返回 `false`
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}
