//! Patient dashboard listing upcoming appointments.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for patients. It fetches the
//! session-scoped appointment list once auth resolves and keeps it fresh
//! with a background poll while the page is mounted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingScreen;
use crate::net;
use crate::net::types::Appointment;
use crate::state::auth::{AuthState, Role};
use crate::util::auth::{install_role_guard, install_unauth_redirect};

/// Patient dashboard — upcoming appointments with a booking shortcut.
/// Redirects to `/login` if the viewer is not authenticated and bounces
/// doctors to their own dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Patient, navigate);

    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let list_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let refresh = move || {
        leptos::task::spawn_local(async move {
            match net::api::fetch_appointments().await {
                Ok(items) => {
                    appointments.set(items);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            list_loading.set(false);
        });
    };

    // Fetch once the session has a user; guards handle everyone else.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if auth.get().user.is_none() {
            return;
        }
        refresh();
        requested.set(true);
    });

    let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let poll_alive_task = poll_alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
            if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            if auth.get_untracked().user.is_none() {
                continue;
            }
            match net::api::fetch_appointments().await {
                Ok(items) => appointments.set(items),
                Err(e) => error.set(Some(e)),
            }
        }
    });
    on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));

    let self_name = move || {
        auth.get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "me".to_owned())
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            net::api::logout().await;
            auth.update(|a| {
                a.user = None;
                a.role = None;
            });
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <Show
            when=move || {
                let state = auth.get();
                !state.loading && state.user.is_some()
            }
            fallback=|| view! { <LoadingScreen/> }
        >
            <div class="dashboard-page">
                <header class="toolbar">
                    <span class="toolbar__title">"Your Appointments"</span>
                    <a href="/book-appointment" class="btn btn--primary">
                        "+ Book a Consultation"
                    </a>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{self_name}</span>
                    <button class="btn" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <p class="page-error">{e}</p> })
                }}

                <Show
                    when=move || !list_loading.get()
                    fallback=|| view! { <p>"Loading appointments..."</p> }
                >
                    {move || {
                        let items = appointments.get();
                        if items.is_empty() {
                            return view! {
                                <p class="page-empty">
                                    "No upcoming appointments. "
                                    <a href="/book-appointment">"Book your first consultation"</a>
                                    "."
                                </p>
                            }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|appt| {
                                let with = appt
                                    .doctor_name
                                    .unwrap_or_else(|| "your practitioner".to_owned());
                                view! {
                                    <div class="appointment-card">
                                        <span class="appointment-card__slot">{appt.slot}</span>
                                        <span>{format!("{with} — {}", appt.reason)}</span>
                                        <span class="appointment-card__status">{appt.status}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </Show>
            </div>
        </Show>
    }
}
