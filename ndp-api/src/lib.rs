//! HTTP client for the remote disaster prediction service.
//!
//! The service exposes a single endpoint:
//! `GET {base_url}predict_disasters?year=<int>`, returning a JSON object
//! keyed by disaster category. The payload is treated as opaque
//! (`serde_json::Value`) end to end: this crate does not validate or reshape
//! it, the renderers pick out what they need.
//!
//! Two clients share the URL construction here: [`client::PredictionClient`]
//! rides on the browser `fetch` API for the WASM app, and the [`native`]
//! module (behind the `native` feature) rides on `reqwest` for the CLI.

pub mod client;
pub mod error;
#[cfg(feature = "native")]
pub mod native;

pub use client::PredictionClient;

/// Origin of the hosted prediction service.
pub const DEFAULT_BASE_URL: &str = "https://natural-disasters-api.onrender.com/";

/// Build the prediction URL for a requested year.
///
/// The year is passed through unvalidated; the service owns range handling.
pub fn predict_disasters_url(base_url: &str, year: i32) -> String {
    format!("{base_url}predict_disasters?year={year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_endpoint_and_year() {
        assert_eq!(
            predict_disasters_url("https://example.test/", 2020),
            "https://example.test/predict_disasters?year=2020"
        );
    }

    #[test]
    fn default_base_url_yields_the_hosted_endpoint() {
        assert_eq!(
            predict_disasters_url(DEFAULT_BASE_URL, 2024),
            "https://natural-disasters-api.onrender.com/predict_disasters?year=2024"
        );
    }

    #[test]
    fn years_are_not_range_checked() {
        assert_eq!(
            predict_disasters_url("http://localhost:8000/", -1),
            "http://localhost:8000/predict_disasters?year=-1"
        );
        assert_eq!(
            predict_disasters_url("http://localhost:8000/", 0),
            "http://localhost:8000/predict_disasters?year=0"
        );
    }
}
