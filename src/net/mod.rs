//! Networking modules for the Careboard HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles same-origin REST calls and `types` defines the shared wire
//! schema mirrored from server payloads.

pub mod api;
pub mod types;
