//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use taxi_grid::controller::Controller;

/// Shared state for the hotspot map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Owner of both map layers and the hotspot request sequence
    pub controller: Signal<Controller>,
    /// Raw contents of the hour input box
    pub hour_input: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            controller: Signal::new(Controller::new()),
            hour_input: Signal::new("0".to_string()),
        }
    }
}
