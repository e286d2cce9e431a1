//! 客户端路由
//!
//! 基于 History API 的单页导航：路由变化写入信号，`RouterOutlet` 据此渲染页面。
//! 导航可附带只存在于内存中的 [`NavigationState`]（如交给支付页的订单摘要），
//! 刷新或前进后退后即丢失。

use busbook_shared::BookingSummary;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入浏览器历史：`push` 为 false 时替换当前条目
fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

/// 整页跳转
///
/// 会重新加载应用，内存中的状态全部丢弃。会话失效时使用。
pub fn hard_navigate(route: AppRoute) {
    log!("[Router] Hard navigation to {}", route);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(route.to_path());
    }
}

/// 已登录用户访问登录/注册页时改去车辆列表
fn guard(target: AppRoute, is_auth: bool) -> AppRoute {
    if is_auth && target.should_redirect_when_authenticated() {
        let redirect = AppRoute::auth_success_redirect();
        log!("[Router] Already authenticated, {} -> {}", target, redirect);
        redirect
    } else {
        target
    }
}

/// 随导航传递的内存状态
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationState {
    /// 预订表单提交后的订单摘要
    Booking(BookingSummary),
}

/// 路由状态与导航操作
///
/// 登录状态以信号形式注入，路由层不依赖会话模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    nav_state: RwSignal<Option<NavigationState>>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));

        Self {
            current_route,
            set_route,
            nav_state: RwSignal::new(None),
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前导航携带的状态（响应式）
    pub fn navigation_state(&self) -> Option<NavigationState> {
        self.nav_state.get()
    }

    /// 导航到指定路由，丢弃之前携带的状态
    pub fn go(&self, route: AppRoute) {
        self.nav_state.set(None);
        self.navigate_to_route(route);
    }

    /// 导航并携带一份内存状态
    pub fn navigate_with_state(&self, route: AppRoute, state: NavigationState) {
        self.go(route);
        self.nav_state.set(Some(state));
    }

    fn navigate_to_route(&self, target_route: AppRoute) {
        let route = guard(target_route, self.is_authenticated.get_untracked());
        write_history(route.to_path(), true);
        self.set_route.set(route);
    }

    /// 浏览器前进/后退
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let nav_state = self.nav_state;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let route = guard(target_route, is_authenticated.get_untracked());
            if route != target_route {
                write_history(route.to_path(), false);
            }

            // 历史记录中不保存内存状态
            nav_state.set(None);
            set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与应用同寿命
        closure.forget();
    }

    /// 在登录/注册页完成登录后离开该页
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let route = current_route.get_untracked();
            let redirect = guard(route, is_authenticated.get());
            if redirect != route {
                write_history(redirect.to_path(), true);
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 在子树中提供 [`RouterService`]
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 按当前路由渲染页面
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// 站内链接
///
/// 拦截点击事件，走客户端导航而不是整页刷新。
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
