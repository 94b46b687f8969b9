//! Reusable Dioxus RSX components for the disaster prediction app.

mod category_selector;
mod chart_container;
mod error_banner;
mod loading_spinner;
mod predict_button;
mod welcome_panel;
mod year_input;

pub use category_selector::CategorySelector;
pub use chart_container::ChartContainer;
pub use error_banner::ErrorBanner;
pub use loading_spinner::LoadingSpinner;
pub use predict_button::PredictButton;
pub use welcome_panel::WelcomePanel;
pub use year_input::YearInput;
