//! Loading indicator components.

use leptos::prelude::*;

/// Full-viewport loading spinner shown while a route resolves.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner" aria-label="Loading"></div>
        </div>
    }
}

/// Small inline spinner for busy rows and buttons.
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <span class="spinner spinner--inline" aria-hidden="true"></span> }
}
