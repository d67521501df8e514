//! Site header with brand and session-aware navigation.

use leptos::prelude::*;

use crate::state::auth::{AuthState, Role};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Header bar: brand link home, booking link, and either a login link or a
/// link to the viewer's dashboard once the session has a user.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let dashboard_href = move || match auth.get().role {
        Some(Role::Doctor) => "/doctor-dashboard",
        _ => "/dashboard",
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                "Careboard"
            </a>
            <span class="site-header__spacer"></span>
            <nav class="site-header__nav">
                <a href="/book-appointment" class="site-header__link">
                    "Book a Consultation"
                </a>
                {move || {
                    if auth.get().user.is_some() {
                        view! {
                            <a href=dashboard_href() class="site-header__link">
                                "My Dashboard"
                            </a>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href="/login" class="site-header__link site-header__link--primary">
                                "Login"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </nav>
            <button
                class="btn site-header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
