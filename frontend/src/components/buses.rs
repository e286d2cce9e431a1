//! 车辆列表页面
//!
//! 列出所有车辆，并允许已登录用户直接预订座位。

use crate::session::{expire, use_session};
use crate::web::alert;
use crate::web::route::AppRoute;
use crate::web::router::hard_navigate;
use busbook_shared::buses::apply_seat_booking;
use busbook_shared::{Bus, ClientErrorKind, RecordId};
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOGIN_REQUIRED_MESSAGE: &str = "You need to login first";
const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
const BOOKING_SUCCESS_MESSAGE: &str = "Booking successful";
const BOOKING_FAILED_MESSAGE: &str = "Booking failed";
const LOAD_FAILED_MESSAGE: &str = "Failed to load buses";

#[component]
pub fn BusesPage() -> impl IntoView {
    let session = use_session();

    let (buses, set_buses) = signal(Vec::<Bus>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 初始加载
    spawn_local(async move {
        match session.api().fetch_buses().await {
            Ok(list) => {
                log!("[Buses] Loaded {} buses", list.len());
                set_buses.set(list);
            }
            Err(e) => {
                error!("[Buses] {}", e.log_line());
                set_error_msg.set(Some(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
        set_loading.set(false);
    });

    let on_book = Callback::new(move |(bus_id, seats): (RecordId, u32)| {
        if session.token().is_none() {
            alert(LOGIN_REQUIRED_MESSAGE);
            return;
        }

        let api = session.api();
        spawn_local(async move {
            match api.add_booking(bus_id.clone(), seats).await {
                Ok(ack) => {
                    alert(ack.message.as_deref().unwrap_or(BOOKING_SUCCESS_MESSAGE));
                    // 只更新被预订的那一辆
                    set_buses.update(|list| {
                        apply_seat_booking(list, &bus_id, seats);
                    });
                }
                Err(e) if e.is_unauthorized() => {
                    alert(SESSION_EXPIRED_MESSAGE);
                    expire(&session);
                    hard_navigate(AppRoute::session_expired_redirect());
                }
                Err(e) => {
                    error!("[Buses] {}", e.log_line());
                    let message = match e.kind {
                        ClientErrorKind::Status => BOOKING_FAILED_MESSAGE.to_string(),
                        _ => e.to_string(),
                    };
                    alert(&message);
                }
            }
        });
    });

    view! {
        <div class="max-w-5xl mx-auto py-8 px-4">
            <h2 class="text-3xl font-bold mb-6">"Available Buses"</h2>
            {move || {
                if loading.get() {
                    view! {
                        <div class="flex justify-center py-10">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any()
                } else if let Some(msg) = error_msg.get() {
                    view! {
                        <div role="alert" class="alert alert-error">
                            <span>{msg}</span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                            <For
                                each=move || buses.get()
                                // 座位数变化时重建卡片
                                key=|bus| (bus.id.clone(), bus.available_seats)
                                children=move |bus| view! { <BusCard bus=bus on_book=on_book /> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// 单辆车卡片
#[component]
fn BusCard(bus: Bus, on_book: Callback<(RecordId, u32)>) -> impl IntoView {
    let (seats, set_seats) = signal(1u32);
    let sold_out = bus.available_seats == 0;
    let max_seats = bus.available_seats.max(1);
    let bus_id = bus.id.clone();

    let on_click = move |_| on_book.run((bus_id.clone(), seats.get_untracked()));

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h3 class="card-title">{bus.name}</h3>
                <p class="text-base-content/70">{bus.route}</p>
                <p>
                    "Available seats: "
                    <span class="font-semibold">{bus.available_seats}</span>
                </p>
                {bus.price.map(|price| view! { <p>{format!("Price: KES {}", price)}</p> })}
                <div class="card-actions items-center justify-end mt-2">
                    <input
                        type="number"
                        min="1"
                        max=max_seats
                        class="input input-bordered input-sm w-20"
                        prop:value=move || seats.get().to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<u32>().unwrap_or(1).max(1);
                            set_seats.set(value);
                        }
                        disabled=sold_out
                    />
                    <button class="btn btn-primary btn-sm" on:click=on_click disabled=sold_out>
                        {if sold_out { "Sold out" } else { "Book" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
