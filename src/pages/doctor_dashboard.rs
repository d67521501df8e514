//! Doctor dashboard listing the day's schedule.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingScreen;
use crate::net;
use crate::net::types::Appointment;
use crate::state::auth::{AuthState, Role};
use crate::util::auth::{install_role_guard, install_unauth_redirect};

/// Doctor dashboard — the practitioner's appointment schedule.
/// Redirects to `/login` if the viewer is not authenticated and bounces
/// patients to `/dashboard`.
#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Doctor, navigate);

    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let list_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let refresh = move || {
        list_loading.set(true);
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
                    <span class="toolbar__title">"Today's Schedule"</span>
                    <button class="btn" on:click=move |_| refresh()>
                        "Refresh"
                    </button>
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
                    fallback=|| view! { <p>"Loading schedule..."</p> }
                >
                    {move || {
                        let items = appointments.get();
                        if items.is_empty() {
                            return view! {
                                <p class="page-empty">"No appointments scheduled."</p>
                            }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|appt| {
                                let with = appt
                                    .patient_name
                                    .unwrap_or_else(|| "a patient".to_owned());
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
