//! Request/response/state lifecycle for the prediction view.
//!
//! `ViewState` is the explicit state object the whole app shares: committed
//! year, selected category, the opaque payload, and the error/loading flags.
//! All mutation goes through the transition methods here, so the lifecycle
//! is testable without any UI framework. The web layer wraps a `ViewState`
//! in a Dioxus signal and calls these transitions from its fetch task.

use crate::category::DisasterCategory;
use crate::dates;
use serde_json::Value;

/// State owned by the view controller.
///
/// `loading` and `error` are never both set by the same request cycle:
/// `begin_request` only raises `loading`, and both completion transitions
/// clear it. `error` can coexist with a payload from an earlier successful
/// fetch; the stale payload is retained, not cleared, on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Committed year: updated by a successful fetch, defaults to the
    /// current calendar year.
    pub year: i32,
    /// Currently selected disaster category filter.
    pub view: DisasterCategory,
    /// Most recently fetched prediction payload, stored verbatim.
    pub payload: Option<Value>,
    /// The most recent request failed.
    pub error: bool,
    /// A request is in flight.
    pub loading: bool,
}

impl ViewState {
    /// Initial state: current calendar year, Severe Storm view, no payload,
    /// no error, not loading.
    pub fn new() -> Self {
        Self {
            year: dates::current_year(),
            view: DisasterCategory::default(),
            payload: None,
            error: false,
            loading: false,
        }
    }

    /// Mark a request as in flight.
    ///
    /// Nothing else changes: the active display branch keeps rendering under
    /// the spinner until the request completes.
    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    /// Apply a successful response for `requested_year`.
    ///
    /// Commits the year, stores the payload verbatim, and clears both flags.
    pub fn apply_success(&mut self, requested_year: i32, payload: Value) {
        self.loading = false;
        self.year = requested_year;
        self.payload = Some(payload);
        self.error = false;
    }

    /// Apply a failed request.
    ///
    /// The previously committed year and payload are left untouched. Network
    /// errors, non-2xx statuses, and malformed bodies all land here; the
    /// cause is logged by the caller and not recorded in the state.
    pub fn apply_failure(&mut self) {
        self.error = true;
        self.loading = false;
    }

    /// Change the selected category filter. User action only; fetches never
    /// touch the view.
    pub fn select_view(&mut self, view: DisasterCategory) {
        self.view = view;
    }

    /// The display branch this state renders.
    pub fn branch(&self) -> DisplayBranch {
        DisplayBranch::for_state(self)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// The three observable display states of the page.
///
/// The loading spinner is not a branch: it overlays whichever branch is
/// active whenever `loading` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBranch {
    /// No payload yet and no error: introductory text and usage
    /// instructions.
    Welcome,
    /// The error flag is set and there is nothing to show: the fixed
    /// usage-limits banner with the welcome content hidden.
    Error,
    /// A payload is present: map and bar chart.
    Results,
}

impl DisplayBranch {
    /// Pick the branch from payload presence and the error flag.
    ///
    /// Branch choice keys off payload presence: a failure after a successful
    /// fetch keeps the results on screen, with the error banner shown above
    /// them. Only when no payload exists does the error flag select the
    /// Error branch.
    pub fn for_state(state: &ViewState) -> Self {
        if state.payload.is_some() {
            DisplayBranch::Results
        } else if state.error {
            DisplayBranch::Error
        } else {
            DisplayBranch::Welcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn initial_state_renders_welcome() {
        let state = ViewState::new();
        assert_eq!(state.year, dates::current_year());
        assert_eq!(state.view, DisasterCategory::SevereStorm);
        assert!(state.payload.is_none());
        assert!(!state.error);
        assert!(!state.loading);
        assert_eq!(state.branch(), DisplayBranch::Welcome);
    }

    #[test]
    fn begin_request_overlays_without_changing_branch() {
        let mut state = ViewState::new();
        state.begin_request();
        assert!(state.loading);
        assert_eq!(state.branch(), DisplayBranch::Welcome);

        state.apply_success(2020, json!({ "Severe Storm": [] }));
        state.begin_request();
        assert!(state.loading);
        assert_eq!(state.branch(), DisplayBranch::Results);
    }

    #[test]
    fn success_commits_year_and_stores_payload_verbatim() {
        let mut state = ViewState::new();
        let payload = json!({
            "Severe Storm": [{ "state": "TX", "probability": 0.82 }],
            "Flood": [],
        });

        state.begin_request();
        state.apply_success(2020, payload.clone());

        assert_eq!(state.year, 2020);
        assert_eq!(state.payload, Some(payload));
        assert!(!state.error);
        assert!(!state.loading);
        assert_eq!(state.branch(), DisplayBranch::Results);
    }

    #[test]
    fn success_clears_a_previous_error() {
        let mut state = ViewState::new();
        state.begin_request();
        state.apply_failure();
        assert!(state.error);

        state.begin_request();
        state.apply_success(2021, json!({}));
        assert!(!state.error);
        assert_eq!(state.branch(), DisplayBranch::Results);
    }

    #[test]
    fn failure_with_no_prior_payload_shows_error_branch() {
        let mut state = ViewState::new();
        let initial_year = state.year;

        state.begin_request();
        state.apply_failure();

        assert!(state.error);
        assert!(!state.loading);
        assert!(state.payload.is_none());
        assert_eq!(state.year, initial_year);
        assert_eq!(state.branch(), DisplayBranch::Error);
    }

    #[test]
    fn failure_retains_stale_payload_and_year() {
        let mut state = ViewState::new();
        let payload = json!({ "Hurricane": [{ "state": "FL", "probability": 0.91 }] });

        state.begin_request();
        state.apply_success(2019, payload.clone());
        state.begin_request();
        state.apply_failure();

        assert!(state.error);
        assert!(!state.loading);
        assert_eq!(state.year, 2019);
        assert_eq!(state.payload, Some(payload));
    }

    #[test]
    fn success_then_failure_keeps_results_branch() {
        // Pins the rendering-gate decision: the branch keys off payload
        // presence, so the error banner coexists with the stale results.
        let mut state = ViewState::new();
        state.begin_request();
        state.apply_success(2020, json!({ "Fire": [] }));
        state.begin_request();
        state.apply_failure();

        assert!(state.error);
        assert_eq!(state.branch(), DisplayBranch::Results);
    }

    #[test]
    fn loading_and_error_are_exclusive_within_a_cycle() {
        let mut state = ViewState::new();

        state.begin_request();
        assert!(state.loading && !state.error);

        state.apply_failure();
        assert!(!state.loading && state.error);

        state.begin_request();
        assert!(state.loading);
        state.apply_success(2022, json!({}));
        assert!(!state.loading && !state.error);
    }

    #[test]
    fn select_view_only_changes_the_filter() {
        let mut state = ViewState::new();
        state.select_view(DisasterCategory::Tornado);
        assert_eq!(state.view, DisasterCategory::Tornado);
        assert!(state.payload.is_none());
        assert_eq!(state.branch(), DisplayBranch::Welcome);

        // A successful fetch never touches the view selection.
        state.begin_request();
        state.apply_success(2020, json!({}));
        assert_eq!(state.view, DisasterCategory::Tornado);
    }

    #[test]
    fn unvalidated_years_are_committed_as_requested() {
        // No range validation: the service owns year semantics.
        let mut state = ViewState::new();
        state.begin_request();
        state.apply_success(-5, json!({}));
        assert_eq!(state.year, -5);
    }
}
