//! Careboard UI
//!
//! Leptos (WASM, client-side rendered) frontend for the Careboard health
//! companion. Anonymous visitors get the public landing page with the AI
//! symptom helper and a demo booking flow; authenticated visitors are routed
//! to the dashboard matching their role.
//!
//! This is a CSR application: it compiles to WebAssembly, mounts to the
//! document body, and talks to the Careboard API over same-origin HTTP.

use leptos::prelude::*;

mod app;
mod components;
mod net;
mod pages;
mod state;
mod util;

fn main() {
    // Panic messages land in the browser console instead of a bare trap.
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(|| view! { <app::App/> });
}
