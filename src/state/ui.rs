//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `chat`) so chrome controls can evolve independently of session data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for site chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
