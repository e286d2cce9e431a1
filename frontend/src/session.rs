//! 会话模块
//!
//! 管理登录令牌与角色，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::config::app_config;
use crate::web::{BrowserStorage, FetchHttpClient};
use busbook_shared::{ApiClient, Session};
use leptos::logging::log;
use leptos::prelude::*;

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<Session>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<Session>,
}

impl SessionContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(Session::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(Session::is_authenticated))
    }

    /// 是否已登录（响应式）
    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    /// 当前角色（响应式）
    pub fn role(&self) -> Option<String> {
        self.state.with(|s| s.role().map(str::to_string))
    }

    /// 当前令牌（非响应式读取）
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_string))
    }

    /// 按当前令牌构造 API 客户端
    pub fn api(&self) -> ApiClient<FetchHttpClient> {
        self.state
            .with_untracked(|s| ApiClient::from_session(FetchHttpClient, app_config(), s))
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话状态
///
/// 从 LocalStorage 恢复上次登录的令牌与角色。
pub fn init_session(ctx: &SessionContext) {
    let session = Session::load(&BrowserStorage);
    if session.is_authenticated() {
        log!("[Session] Restored session (role: {:?})", session.role());
    }
    ctx.set_state.set(session);
}

/// 登录成功，保存令牌
pub fn login(ctx: &SessionContext, token: String, role: Option<String>) {
    ctx.set_state
        .update(|session| session.start(&BrowserStorage, token, role));
}

/// 令牌被服务端拒绝，只清除令牌
pub fn expire(ctx: &SessionContext) {
    log!("[Session] Token rejected by server, clearing it");
    ctx.set_state.update(|session| session.expire(&BrowserStorage));
}

/// 注销并清除令牌与角色
///
/// 页面跳转由调用方负责。
pub fn logout(ctx: &SessionContext) {
    ctx.set_state.update(|session| session.clear(&BrowserStorage));
}
