//! BusBook 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理
//! - `components`: UI 组件层

mod config;
mod session;
mod components {
    pub mod booking_form;
    pub mod bookings;
    pub mod buses;
    pub mod home;
    pub mod login;
    pub mod navbar;
    pub mod payment;
    pub mod profile;
    pub mod register;
}
pub(crate) mod web;

use crate::components::booking_form::BookingFormPage;
use crate::components::bookings::BookingsPage;
use crate::components::buses::BusesPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::payment::PaymentPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::session::{SessionContext, init_session};

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Buses => view! { <BusesPage /> }.into_any(),
        AppRoute::Book => view! { <BookingFormPage /> }.into_any(),
        AppRoute::Payment => view! { <PaymentPage /> }.into_any(),
        AppRoute::Bookings => view! { <BookingsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Home class="btn btn-primary mt-6">"Back home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let session = SessionContext::new();
    provide_context(session);

    // 2. 初始化会话状态（从 LocalStorage 恢复令牌）
    init_session(&session);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = session.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <main class="min-h-screen bg-base-200">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
