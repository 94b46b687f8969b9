//! Introductory panel shown before the first successful fetch.

use dioxus::prelude::*;
use ndp_core::category::DisasterCategory;

#[derive(Props, Clone, PartialEq)]
pub struct WelcomePanelProps {
    /// Hide the panel (CSS-level) while the error banner is showing.
    #[props(default = false)]
    pub hidden: bool,
}

/// Welcome text, the supported category list, and the data-source
/// attribution. Stays mounted while hidden so the markup structure matches
/// the branch state machine.
#[component]
pub fn WelcomePanel(props: WelcomePanelProps) -> Element {
    let display = if props.hidden { "none" } else { "block" };

    rsx! {
        div {
            style: "display: {display}; padding: 16px; max-width: 640px; margin: 0 auto;",
            h2 { "Welcome!" }
            p {
                "This app is intended to predict potential natural disasters, \
                 specifically focused on the most common disasters in the U.S."
            }
            div {
                style: "margin: 8px 0 8px 16px;",
                for label in DisasterCategory::ALL.map(|c| c.plural_label()) {
                    p {
                        style: "margin: 2px 0;",
                        "\u{2022} {label}"
                    }
                }
            }
            p {
                style: "padding: 8px 12px; background: #E3F2FD; border-radius: 4px;",
                "Enter a year and select a disaster above to view predictions."
            }
            h3 { "Notes:" }
            p {
                "Predictions are based on the U.S. Natural Disaster Declarations dataset from "
                a {
                    href: "https://www.kaggle.com/datasets/headsortails/us-natural-disaster-declarations",
                    "Kaggle"
                }
                ". This app was built for educational purposes only and does not \
                 guarantee accurate predictions."
            }
        }
    }
}
