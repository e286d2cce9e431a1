//! 个人资料页面
//!
//! 展示用户信息与历史预订，支持更换头像和注销。

use crate::config::app_config;
use crate::session::{logout, use_session};
use crate::web::read_file_part;
use crate::web::route::AppRoute;
use crate::web::router::hard_navigate;
use busbook_shared::{ClientErrorKind, Profile, ProfileBooking};
use leptos::html;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

const LOGIN_REQUIRED_MESSAGE: &str = "⚠️ You must login to view your profile.";
const LOAD_FAILED_MESSAGE: &str = "Failed to load profile";
const PICTURE_FIELD: &str = "profile_picture";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let (profile, set_profile) = signal(Option::<Profile>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (uploading, set_uploading) = signal(false);
    let file_input = NodeRef::<html::Input>::new();

    if session.token().is_none() {
        error!("[Profile] No auth token found");
        set_error_msg.set(Some(LOGIN_REQUIRED_MESSAGE.to_string()));
        set_loading.set(false);
    } else {
        spawn_local(async move {
            match session.api().fetch_profile().await {
                Ok(data) => set_profile.set(Some(data)),
                Err(e) => {
                    error!("[Profile] {}", e.log_line());
                    // 只有网络错误原样展示
                    let message = match e.kind {
                        ClientErrorKind::Transport => e.to_string(),
                        _ => LOAD_FAILED_MESSAGE.to_string(),
                    };
                    set_error_msg.set(Some(message));
                }
            }
            set_loading.set(false);
        });
    }

    let on_pick = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        set_uploading.set(true);
        let api = session.api();
        spawn_local(async move {
            match read_file_part(PICTURE_FIELD, &file).await {
                Ok(part) => match api.update_profile_picture(part).await {
                    Ok(resp) => {
                        log!("[Profile] Profile picture updated");
                        set_profile.update(|current| {
                            if let Some(current) = current {
                                current.profile_picture = resp.user.profile_picture;
                            }
                        });
                    }
                    Err(e) => error!("[Profile] Upload failed: {}", e.log_line()),
                },
                Err(e) => error!("[Profile] Failed to read file: {:?}", e),
            }
            set_uploading.set(false);
        });
    };

    let on_logout = move |_| {
        logout(&session);
        hard_navigate(AppRoute::Login);
    };

    view! {
        <div class="max-w-3xl mx-auto py-8 px-4">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-10">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any();
                }
                if let Some(msg) = error_msg.get() {
                    return view! {
                        <div role="alert" class="alert alert-warning">
                            <span>{msg}</span>
                        </div>
                    }
                    .into_any();
                }
                let Some(data) = profile.get() else {
                    return ().into_any();
                };
                let avatar = data.clone();
                let Profile { username, email, bookings, .. } = data;

                view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center">
                            <button
                                class="avatar placeholder cursor-pointer"
                                title="Change profile picture"
                                on:click=on_pick
                                disabled=move || uploading.get()
                            >
                                <Avatar profile=avatar />
                            </button>
                            <h2 class="card-title text-2xl">{username.unwrap_or_default()}</h2>
                            <p class="text-base-content/70">{email.unwrap_or_default()}</p>
                            {move || session.role().map(|role| view! { <span class="badge badge-outline">{role}</span> })}
                            <button class="btn btn-outline btn-error btn-sm mt-2" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    </div>

                    <h3 class="text-xl font-semibold mt-8 mb-4">"Booking History"</h3>
                    <ProfileBookings bookings=bookings />
                }
                .into_any()
            }}
            <input
                node_ref=file_input
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_file_change
            />
        </div>
    }
}

/// 头像，没有图片时显示用户名首字母
#[component]
fn Avatar(profile: Profile) -> impl IntoView {
    match profile.profile_picture.as_deref() {
        Some(path) => view! {
            <div class="w-24 rounded-full">
                <img src=app_config().asset_url(path) alt="Profile picture" />
            </div>
        }
        .into_any(),
        None => view! {
            <div class="bg-neutral text-neutral-content w-24 rounded-full">
                <span class="text-3xl">
                    {profile.initial().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                </span>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProfileBookings(bookings: Vec<ProfileBooking>) -> impl IntoView {
    if bookings.is_empty() {
        return view! { <p class="text-base-content/70">"No bookings yet."</p> }.into_any();
    }

    view! {
        <div class="grid gap-4 sm:grid-cols-2">
            {bookings
                .into_iter()
                .map(|booking| view! {
                    <div class="card bg-base-100 shadow-sm">
                        {booking.image_url.as_deref().map(|url| view! {
                            <figure>
                                <img src=app_config().asset_url(url) alt="Bus" class="h-32 w-full object-cover" />
                            </figure>
                        })}
                        <div class="card-body p-4">
                            <h4 class="font-semibold">{booking.bus.clone().unwrap_or_default()}</h4>
                            <p class="text-sm text-base-content/70">{booking.route.clone().unwrap_or_default()}</p>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
