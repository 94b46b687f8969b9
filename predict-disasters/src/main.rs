//! U.S. Natural Disaster Predictions
//!
//! Single-page app: pick a year and a disaster category, fetch the
//! prediction payload for that year from the remote service, and render it
//! as a U.S. map and a bar chart.
//!
//! Data flow:
//! 1. On mount: initialize the D3 chart scripts.
//! 2. On submit: `fetch_predictions` issues the GET and applies the
//!    success/failure transition to the shared view state.
//! 3. A render effect forwards payload + view + committed year to the D3
//!    bridge whenever any of them change.

use dioxus::prelude::*;
use ndp_api::PredictionClient;
use ndp_chart_ui::components::{
    CategorySelector, ChartContainer, ErrorBanner, LoadingSpinner, PredictButton, WelcomePanel,
    YearInput,
};
use ndp_chart_ui::fetch;
use ndp_chart_ui::js_bridge;
use ndp_chart_ui::state::AppState;
use ndp_core::view_state::DisplayBranch;

/// DOM id for the D3 map container div.
const MAP_CONTAINER_ID: &str = "disaster-map";
/// DOM id for the D3 bar chart container div.
const BAR_CHART_CONTAINER_ID: &str = "disaster-bar-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("predict-disasters-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect 1: load D3 chart scripts once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
    });

    // ─── Effect 2: forward payload + view + year to D3 on change ───
    // Re-runs whenever the view state changes: a committed fetch, a category
    // switch, or a completed request cycle.
    use_effect(move || {
        // Clone out of the signal immediately so the read borrow doesn't
        // interfere with Dioxus signal tracking.
        let view_state = state.view_state.read().clone();

        if view_state.loading {
            return;
        }
        let Some(payload) = view_state.payload.as_ref() else {
            return;
        };

        // The payload goes through verbatim; the renderers pick out the
        // selected category themselves.
        let data_json = serde_json::to_string(payload).unwrap_or_default();
        let config_json = serde_json::json!({
            "view": view_state.view.label(),
            "year": view_state.year,
            "title": format!("{} Predictions for {}", view_state.view.label(), view_state.year),
        })
        .to_string();

        js_bridge::render_disaster_map(MAP_CONTAINER_ID, &data_json, &config_json);
        js_bridge::render_bar_chart(BAR_CHART_CONTAINER_ID, &data_json, &config_json);
    });

    let on_predict = move |requested_year: i32| {
        fetch::fetch_predictions(state.view_state, PredictionClient::new(), requested_year);
    };

    // ─── Render ───
    let view_state = state.view_state.read().clone();
    let branch = view_state.branch();

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; font-size: 22px;",
                "U.S. Natural Disaster Predictions"
            }

            // Input collector: year, category, submit
            div {
                style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; justify-content: center;",
                YearInput {}
                CategorySelector {}
                PredictButton { on_predict }
            }

            // The banner coexists with stale results; branch choice below
            // keys off payload presence, not this flag.
            if view_state.error {
                ErrorBanner {}
            }

            if branch == DisplayBranch::Results {
                ChartContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    min_height: 520,
                }
                ChartContainer {
                    id: BAR_CHART_CONTAINER_ID.to_string(),
                    min_height: 420,
                }
            } else {
                WelcomePanel { hidden: view_state.error }
            }

            // Spinner overlays independently of the branch above.
            if view_state.loading {
                LoadingSpinner {}
            }
        }
    }
}
