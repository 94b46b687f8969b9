//! Native client for CLI use.
//!
//! Mirrors the browser client but rides on `reqwest` and configures a
//! transport timeout: the CLI has no spinner to keep honest, so a hung
//! request fails after a minute instead of blocking the terminal forever.

use serde_json::Value;
use std::time::Duration;

use crate::error::ApiError;
use crate::predict_disasters_url;

/// Build a reqwest client with the timeout the CLI uses.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
}

/// Fetch the prediction payload for `year` from `base_url`.
///
/// Same single-call, no-retry contract as the browser client.
pub async fn fetch_prediction(
    client: &reqwest::Client,
    base_url: &str,
    year: i32,
) -> Result<Value, ApiError> {
    let url = predict_disasters_url(base_url, year);
    log::debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
