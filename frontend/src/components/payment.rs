//! 支付确认页面
//!
//! 只展示预订表单随导航传来的订单摘要，不发起任何请求。
//! 直接打开或刷新此页时没有摘要，显示引导链接。

use crate::web::route::AppRoute;
use crate::web::router::{Link, NavigationState, use_router};
use busbook_shared::BookingSummary;
use leptos::prelude::*;

#[component]
pub fn PaymentPage() -> impl IntoView {
    let router = use_router();

    move || match router.navigation_state() {
        Some(NavigationState::Booking(summary)) => view! { <SummaryCard summary=summary /> }.into_any(),
        None => view! {
            <div class="text-center py-16">
                <p class="text-lg text-base-content/70">"No booking to pay for."</p>
                <Link to=AppRoute::Book class="btn btn-primary mt-4">"Book a seat"</Link>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn SummaryCard(summary: BookingSummary) -> impl IntoView {
    let rows = [
        ("Passenger", summary.form.name.clone()),
        ("ID Number", summary.form.id_number.clone()),
        ("School ID", summary.form.school_id.clone()),
        ("Bus", summary.bus_name.clone()),
        ("Vehicle", summary.form.vehicle_type.label().to_string()),
        ("Route", summary.route.clone()),
        ("Seat", summary.seat_no.clone()),
    ];

    view! {
        <div class="flex justify-center py-10 px-4">
            <div class="card w-full max-w-lg bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-2xl">"Payment"</h2>
                    <table class="table">
                        <tbody>
                            {rows
                                .into_iter()
                                .filter(|(_, value)| !value.trim().is_empty())
                                .map(|(label, value)| view! {
                                    <tr>
                                        <th class="w-1/3">{label}</th>
                                        <td>{value}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <div class="flex items-center justify-between mt-4">
                        <span class="text-lg">"Amount due"</span>
                        <span class="text-2xl font-bold text-primary">{summary.price}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
