//! 我的预订页面

use crate::session::use_session;
use crate::web::confirm;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use busbook_shared::bookings::remove_booking;
use busbook_shared::{Booking, BookingsPayload, RecordId};
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

const CANCEL_CONFIRM_MESSAGE: &str = "Are you sure you want to cancel this booking?";

fn price_label(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("KES {}", price),
        None => "-".to_string(),
    }
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let session = use_session();

    let (bookings, set_bookings) = signal(Vec::<Booking>::new());
    let (loading, set_loading) = signal(true);

    if session.token().is_none() {
        // 未登录时直接显示空列表
        warn!("[Bookings] No auth token found, user is not logged in");
        set_loading.set(false);
    } else {
        spawn_local(async move {
            match session.api().fetch_bookings_payload().await {
                Ok(payload) => {
                    if matches!(payload, BookingsPayload::Unrecognized) {
                        warn!("[Bookings] Unexpected response format, showing no bookings");
                    }
                    let shape = payload.shape();
                    let list = payload.into_bookings();
                    log!("[Bookings] Loaded {} bookings ({} response)", list.len(), shape);
                    set_bookings.set(list);
                }
                Err(e) => {
                    if let Some(hint) = e.status_hint() {
                        error!("[Bookings] {}", hint);
                    }
                    error!("[Bookings] Failed to fetch bookings: {}", e.log_line());
                }
            }
            set_loading.set(false);
        });
    }

    // 取消只影响本地列表
    let on_cancel = Callback::new(move |id: RecordId| {
        if confirm(CANCEL_CONFIRM_MESSAGE) {
            set_bookings.update(|list| remove_booking(list, &id));
        }
    });

    view! {
        <div class="max-w-4xl mx-auto py-8 px-4">
            <h2 class="text-3xl font-bold mb-6">"My Bookings"</h2>
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-10">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any();
                }

                let list = bookings.get();
                if list.is_empty() {
                    view! {
                        <div class="text-center py-10 text-base-content/70">
                            <p>"You have no bookings yet."</p>
                            <Link to=AppRoute::Buses class="btn btn-primary btn-sm mt-4">"Browse buses"</Link>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <ul class="space-y-4">
                            {list
                                .into_iter()
                                .map(|booking| view! { <BookingItem booking=booking on_cancel=on_cancel /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BookingItem(booking: Booking, on_cancel: Callback<RecordId>) -> impl IntoView {
    let Booking {
        booking_id,
        bus_name,
        route,
        seats_booked,
        total_price,
    } = booking;

    view! {
        <li class="card bg-base-100 shadow-sm">
            <div class="card-body flex-row items-center justify-between">
                <div class="space-y-1">
                    <h3 class="card-title">{bus_name.unwrap_or_default()}</h3>
                    <p class="text-base-content/70">{route.unwrap_or_default()}</p>
                    <p>"Seats: " {seats_booked.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}</p>
                    <p>"Total Price: " {price_label(total_price)}</p>
                    <span class="badge badge-success">"Confirmed"</span>
                </div>
                {booking_id.map(|id| view! {
                    <button class="btn btn-error btn-outline btn-sm" on:click=move |_| on_cancel.run(id.clone())>
                        "Cancel"
                    </button>
                })}
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::price_label;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(Some(1500.0)), "KES 1500");
        assert_eq!(price_label(Some(750.5)), "KES 750.5");
        assert_eq!(price_label(None), "-");
    }
}
