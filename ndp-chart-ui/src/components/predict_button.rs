//! Submit button for the prediction form.

use crate::state::AppState;
use dioxus::prelude::*;

/// Submit button. Parses the uncommitted year input and hands it to the
/// caller; non-numeric input is ignored with a log line. Disabled while a
/// request is in flight.
#[component]
pub fn PredictButton(on_predict: EventHandler<i32>) -> Element {
    let state = use_context::<AppState>();
    let loading = state.view_state.read().loading;

    let on_click = move |_| {
        let raw = (state.input_year)();
        match raw.trim().parse::<i32>() {
            Ok(year) => on_predict.call(year),
            Err(_) => log::warn!("ignoring non-numeric year input: {raw:?}"),
        }
    };

    rsx! {
        button {
            style: "padding: 4px 16px; font-weight: bold;",
            disabled: loading,
            onclick: on_click,
            "Predict"
        }
    }
}
