//! 路由表
//!
//! 路径与页面的对应关系以及登录后的跳转规则，不依赖 DOM。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 车辆列表
    Buses,
    /// 预订表单
    Book,
    /// 支付确认
    Payment,
    /// 我的预订
    Bookings,
    /// 个人资料
    Profile,
    /// 登录
    Login,
    /// 注册
    Register,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 末尾斜杠会被忽略，`/buses/` 与 `/buses` 等价。
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/buses" => Self::Buses,
            "/book" => Self::Book,
            "/payment" => Self::Payment,
            "/bookings" => Self::Bookings,
            "/profile" => Self::Profile,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Buses => "/buses",
            Self::Book => "/book",
            Self::Payment => "/payment",
            Self::Bookings => "/bookings",
            Self::Profile => "/profile",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::NotFound => "/404",
        }
    }

    /// 定义已认证用户是否应该离开此路由（登录、注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证成功时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Buses
    }

    /// 会话失效时跳转的目标
    pub fn session_expired_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 8] = [
        AppRoute::Home,
        AppRoute::Buses,
        AppRoute::Book,
        AppRoute::Payment,
        AppRoute::Bookings,
        AppRoute::Profile,
        AppRoute::Login,
        AppRoute::Register,
    ];

    #[test]
    fn test_paths_resolve_back_to_route() {
        for route in ALL {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(AppRoute::from_path("/bookings/"), AppRoute::Bookings);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/buses/12"), AppRoute::NotFound);
    }

    #[test]
    fn test_only_auth_pages_redirect_when_signed_in() {
        let redirecting: Vec<_> = ALL
            .into_iter()
            .filter(AppRoute::should_redirect_when_authenticated)
            .collect();
        assert_eq!(redirecting, [AppRoute::Login, AppRoute::Register]);
        assert!(!AppRoute::auth_success_redirect().should_redirect_when_authenticated());
    }
}
