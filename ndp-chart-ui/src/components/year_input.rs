//! Year input field.

use crate::state::AppState;
use dioxus::prelude::*;

/// Number input for the requested year.
///
/// Writes the raw text into `input_year`; the value is parsed and committed
/// only when the user submits. No range validation is performed.
#[component]
pub fn YearInput() -> Element {
    let mut state = use_context::<AppState>();
    let input_year = (state.input_year)();

    let on_change = move |evt: Event<FormData>| {
        state.input_year.set(evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Year: "
            input {
                r#type: "number",
                value: "{input_year}",
                style: "width: 90px;",
                onchange: on_change,
            }
        }
    }
}
