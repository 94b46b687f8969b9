//! The single asynchronous fetch operation.

use dioxus::prelude::*;
use ndp_api::PredictionClient;
use ndp_core::view_state::ViewState;

/// Kick off a prediction fetch for `requested_year`.
///
/// Raises the loading flag synchronously, then resolves the request in a
/// spawned task and applies the success or failure transition. Overlapping
/// invocations are not fenced: whichever response resolves last wins. Every
/// transition funnels through [`ViewState`], so fencing on a request
/// sequence number would be a one-place change here if that ever becomes
/// worth fixing.
///
/// The failure cause is logged and then collapsed: the state records only
/// that the most recent request failed.
pub fn fetch_predictions(
    mut state: Signal<ViewState>,
    client: PredictionClient,
    requested_year: i32,
) {
    state.write().begin_request();

    spawn(async move {
        match client.predict_disasters(requested_year).await {
            Ok(payload) => {
                log::info!("predictions for {requested_year} received");
                state.write().apply_success(requested_year, payload);
            }
            Err(e) => {
                log::warn!("prediction fetch for {requested_year} failed: {e}");
                state.write().apply_failure();
            }
        }
    });
}
