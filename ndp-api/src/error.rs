//! Error type for prediction service calls.

use std::fmt;

/// Why a prediction request failed.
///
/// The variants exist for log output only. The view layer collapses every
/// failure to a single error flag, so nothing downstream of the fetch call
/// distinguishes a network failure from a server-side one.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure before any response arrived.
    Network(String),
    /// The service answered with a non-success HTTP status.
    Status(u16),
    /// The response body was not parseable JSON.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "request failed: {msg}"),
            ApiError::Status(code) => write!(f, "server returned HTTP {code}"),
            ApiError::Decode(msg) => write!(f, "malformed response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_kind() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(ApiError::Status(500).to_string(), "server returned HTTP 500");
        assert_eq!(
            ApiError::Decode("expected value at line 1".to_string()).to_string(),
            "malformed response body: expected value at line 1"
        );
    }
}
