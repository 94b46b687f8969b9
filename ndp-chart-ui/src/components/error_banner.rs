//! Error banner component.

use dioxus::prelude::*;

/// Fixed failure banner.
///
/// Every failure kind surfaces as the same usage-limits message; the real
/// cause only reaches the console log.
#[component]
pub fn ErrorBanner() -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "Server has reached its usage limits."
        }
    }
}
