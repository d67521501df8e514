//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::net;
use crate::pages::{
    book_appointment::BookAppointmentPage, dashboard::DashboardPage,
    doctor_dashboard::DoctorDashboardPage, home::HomePage, login::LoginPage,
};
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};
use crate::util::dark_mode;

/// Root application component.
///
/// Provides shared state contexts, kicks off the one-shot session
/// bootstrap, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
    });
    dark_mode::apply(ui.get_untracked().dark_mode);

    provide_context(auth);
    provide_context(chat);
    provide_context(ui);

    // Resolve the session once at startup; every route observes the result
    // through the shared auth signal.
    leptos::task::spawn_local(async move {
        let user = net::api::fetch_current_session().await;
        auth.set(AuthState::resolved(user));
    });

    view! {
        <Title text="Careboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("doctor-dashboard") view=DoctorDashboardPage/>
                <Route path=StaticSegment("book-appointment") view=BookAppointmentPage/>
            </Routes>
        </Router>
    }
}
