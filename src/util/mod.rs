//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing decisions and browser/environment
//! concerns from page and component logic so policy stays unit-testable
//! without a browser harness.

pub mod auth;
pub mod dark_mode;
pub mod routing;
