//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading or
//! writing shared state from Leptos context providers.

pub mod chatbot;
pub mod header;
pub mod loading;
