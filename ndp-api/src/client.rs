//! Browser-side client riding on the `fetch` API via `gloo-net`.

use gloo_net::http::Request;
use serde_json::Value;

use crate::error::ApiError;
use crate::{predict_disasters_url, DEFAULT_BASE_URL};

/// Client for the prediction service, usable from the WASM app.
#[derive(Clone, PartialEq, Debug)]
pub struct PredictionClient {
    base_url: String,
}

impl PredictionClient {
    /// Client pointing at the hosted service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client pointing at a custom origin (local service, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch the prediction payload for `year`.
    ///
    /// Exactly one network call per invocation; no retry and no timeout (a
    /// hung request resolves whenever the browser transport gives up). The
    /// payload is returned verbatim as parsed JSON.
    pub async fn predict_disasters(&self, year: i32) -> Result<Value, ApiError> {
        let url = predict_disasters_url(&self.base_url, year);
        log::debug!("GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_compare_by_origin() {
        assert_eq!(PredictionClient::new(), PredictionClient::default());
        assert_ne!(
            PredictionClient::new(),
            PredictionClient::with_base_url("http://localhost:8000/")
        );
    }
}
