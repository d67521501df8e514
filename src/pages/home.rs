//! Public landing page with session resolution and role routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` is both the marketing page for anonymous visitors and the entry
//! point for authenticated users. Once the session resolves with a user,
//! the page replace-navigates to the role dashboard and keeps showing the
//! loading screen until the router takes over, so public content is never
//! flashed at an authenticated viewer.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chatbot::ChatbotPanel;
use crate::components::header::Header;
use crate::components::loading::LoadingScreen;
use crate::state::auth::AuthState;
use crate::util::routing::{self, Destination};

/// Landing page — session router plus public marketing content.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Destination already issued for this page instance, if any. Redirects
    // are keyed on it so an unchanged session never navigates twice.
    let issued = RwSignal::new(None::<Destination>);

    Effect::new(move || {
        // Reading the whole state keeps the effect subscribed to every
        // session field it branches on.
        let state = auth.get();
        let Some(dest) = routing::next_redirect(&state, issued.get_untracked()) else {
            return;
        };
        if dest == Destination::Login {
            let user_id = state.user.as_ref().map_or("<unknown>", |u| u.id.as_str());
            log::warn!("{}", unknown_role_warning(user_id));
        }
        issued.set(Some(dest));
        // Replace instead of push so the landing page drops out of history.
        navigate(dest.path(), NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        });
    });

    let show_chat = RwSignal::new(false);

    view! {
        <Show
            when=move || auth.with(routing::show_public_landing)
            fallback=|| view! { <LoadingScreen/> }
        >
            <div class="home-page">
                <Header/>
                <main class="home-page__main">
                    <section class="home-page__hero">
                        <h1>"Welcome to Careboard"</h1>
                        <p class="home-page__tagline">
                            "Your intelligent health companion. Get guidance on symptoms or "
                            "schedule a consultation, whenever you need it."
                        </p>
                    </section>

                    <section class="home-page__cards">
                        <div class="feature-card">
                            <h2>"AI Symptom Helper"</h2>
                            <p>
                                "Describe what you're feeling and get quick general guidance. "
                                "The assistant can point you in the right direction, but it is "
                                "not a diagnosis."
                            </p>
                            <button class="btn btn--primary" on:click=move |_| show_chat.set(true)>
                                "Ask our AI"
                            </button>
                            <p class="feature-card__note">
                                "To keep your conversation history, "
                                <a href="/login">"login or create an account"</a> "."
                            </p>
                        </div>

                        <div class="feature-card">
                            <h2>"Schedule a Consultation"</h2>
                            <p>
                                "Ready to speak with a professional? Pick a practitioner and a "
                                "time that suits you."
                            </p>
                            <a href="/book-appointment" class="btn btn--primary">
                                "Book Now"
                            </a>
                            <p class="feature-card__note">
                                "Booking management is available for registered users. "
                                <a href="/login">"Login or sign up"</a> " to access it."
                            </p>
                        </div>
                    </section>
                </main>

                <footer class="home-page__footer">
                    <p>"Careboard — your health, intelligently managed."</p>
                    <p>
                        "Disclaimer: information provided here is general guidance and not a "
                        "substitute for professional medical advice."
                    </p>
                </footer>

                <Show when=move || show_chat.get()>
                    <div class="dialog-backdrop" on:click=move |_| show_chat.set(false)>
                        <div class="dialog dialog--chat" on:click=move |ev| ev.stop_propagation()>
                            <ChatbotPanel/>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

fn unknown_role_warning(user_id: &str) -> String {
    format!("user {user_id} is authenticated but has no recognized role; redirecting to login")
}
