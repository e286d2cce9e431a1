use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    // None: 检测中
    let (api_online, set_api_online) = signal(Option::<bool>::None);

    spawn_local(async move {
        let online = match session.api().ping().await {
            Ok(_) => true,
            Err(e) => {
                warn!("[Home] API health check failed: {}", e.log_line());
                false
            }
        };
        set_api_online.set(Some(online));
    });

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">"Travel made simple"</h1>
                    <p class="py-6">"Find a bus, pick your seats and book in a few clicks."</p>
                    <div class="flex justify-center gap-4">
                        <Link to=AppRoute::Buses class="btn btn-primary">"View Buses"</Link>
                        <Link to=AppRoute::Book class="btn btn-outline">"Book a Seat"</Link>
                    </div>
                    <div class="mt-8">
                        {move || match api_online.get() {
                            None => view! { <span class="badge badge-ghost">"Checking service..."</span> }.into_any(),
                            Some(true) => view! { <span class="badge badge-success">"Service online"</span> }.into_any(),
                            Some(false) => view! { <span class="badge badge-error">"Service unavailable"</span> }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
