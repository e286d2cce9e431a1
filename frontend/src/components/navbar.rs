use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

/// 顶部导航栏
///
/// 已登录时显示预订与个人资料入口，否则显示登录与注册。
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">"BusBooking"</Link>
            </div>
            <ul class="menu menu-horizontal gap-1">
                <li><Link to=AppRoute::Home>"Home"</Link></li>
                <li><Link to=AppRoute::Buses>"Buses"</Link></li>
                <li><Link to=AppRoute::Book>"Book"</Link></li>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! {
                        <li><Link to=AppRoute::Login>"Login"</Link></li>
                        <li><Link to=AppRoute::Register>"Register"</Link></li>
                    }
                >
                    <li><Link to=AppRoute::Bookings>"Bookings"</Link></li>
                    <li><Link to=AppRoute::Profile>"Profile"</Link></li>
                </Show>
            </ul>
        </nav>
    }
}
