//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `ui`) so individual components
//! can depend on small focused models provided through Leptos context.

pub mod auth;
pub mod chat;
pub mod ui;
