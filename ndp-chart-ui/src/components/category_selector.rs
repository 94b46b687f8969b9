//! Dropdown selector for choosing a disaster category.

use crate::state::AppState;
use dioxus::prelude::*;
use ndp_core::category::DisasterCategory;

/// Disaster category dropdown.
///
/// Changes the view filter immediately; no fetch is triggered. The map and
/// chart re-render from the already-loaded payload.
#[component]
pub fn CategorySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.view_state.read().view;

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<DisasterCategory>() {
            Ok(category) => state.view_state.write().select_view(category),
            Err(e) => log::warn!("ignoring selector value: {e}"),
        }
    };

    rsx! {
        label {
            r#for: "category-select",
            style: "font-weight: bold;",
            "Disaster: "
            select {
                id: "category-select",
                onchange: on_change,
                for category in DisasterCategory::ALL {
                    option {
                        value: category.label(),
                        selected: category == selected,
                        "{category}"
                    }
                }
            }
        }
    }
}
