//! 预订表单页面
//!
//! 提交成功后短暂展示提示，再携带订单摘要跳转到支付页。

mod form_state;
mod passenger_fields;

use std::time::Duration;

use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::{NavigationState, use_router};
use form_state::FormState;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use passenger_fields::PassengerFields;

/// 入场动画延迟
const ENTRANCE_DELAY: Duration = Duration::from_millis(100);
/// 提交成功到跳转支付页的延迟
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

const SUBMITTED_MESSAGE: &str = "Booking info submitted!";
const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Try again later.";

#[component]
pub fn BookingFormPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let state = FormState::new();

    let (visible, set_visible) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    // 入场动画，组件卸载时取消
    if let Ok(handle) = set_timeout_with_handle(move || set_visible.set(true), ENTRANCE_DELAY) {
        on_cleanup(move || handle.clear());
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = state.to_data();

        // 本地校验，失败时不发请求
        if let Err(e) = data.validate() {
            set_error_msg.set(Some(e.to_string()));
            set_success_msg.set(None);
            return;
        }

        set_error_msg.set(None);

        let api = session.api();
        spawn_local(async move {
            match api.submit_booking_form(&data).await {
                Ok(_) => {
                    log!("[BookingForm] Submitted booking for {}", data.route());
                    set_success_msg.set(Some(SUBMITTED_MESSAGE.to_string()));
                    let summary = data.summary();
                    set_timeout(
                        move || {
                            router.navigate_with_state(AppRoute::Payment, NavigationState::Booking(summary))
                        },
                        REDIRECT_DELAY,
                    );
                }
                Err(e) => {
                    error!("[BookingForm] {}", e.log_line());
                    set_error_msg.set(Some(SUBMIT_FAILED_MESSAGE.to_string()));
                }
            }
        });
    };

    let on_clear = move |_| {
        state.reset();
        set_error_msg.set(None);
        set_success_msg.set(None);
    };

    view! {
        <div class="flex justify-center py-10 px-4">
            <div class=move || {
                let motion = if visible.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" };
                format!("card w-full max-w-xl bg-base-100 shadow-xl transition-all duration-700 {motion}")
            }>
                <form class="card-body gap-4" on:submit=on_submit>
                    <h2 class="card-title text-2xl">"Book Your Seat"</h2>

                    {move || error_msg.get().map(|msg| view! {
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    })}
                    {move || success_msg.get().map(|msg| view! {
                        <div role="status" class="alert alert-success text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    })}

                    <PassengerFields state=state />

                    <div class="card-actions justify-end mt-4">
                        <button type="button" class="btn btn-ghost" on:click=on_clear>
                            "Clear"
                        </button>
                        <button type="submit" class="btn btn-primary">"Submit Booking"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
