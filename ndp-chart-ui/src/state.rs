//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the shared signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The fetch lifecycle itself lives in
//! [`ndp_core::view_state::ViewState`]; this struct only makes it reactive.

use dioxus::prelude::*;
use ndp_core::view_state::ViewState;

/// Shared application state for the prediction app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetch lifecycle state: committed year, selected view, payload, flags.
    pub view_state: Signal<ViewState>,
    /// Year currently typed into the selector, not yet submitted.
    pub input_year: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default values. The year input starts at
    /// the default committed year so the form and the state agree on load.
    pub fn new() -> Self {
        let view_state = ViewState::new();
        let input_year = view_state.year.to_string();
        Self {
            view_state: Signal::new(view_state),
            input_year: Signal::new(input_year),
        }
    }
}
