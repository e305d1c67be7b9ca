//! Error types for the detector workflow.

use thiserror::Error;

/// One or more files could not be read into a preview.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to read {failed} of {total} previews, first failure: {first}")]
pub struct PreviewReadError {
    pub failed: usize,
    pub total: usize,
    pub first: String,
}

/// Errors raised while asking the inference service for predictions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The service answered with a status outside 2xx
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// No response was received
    #[error("Network error: {0}")]
    Transport(String),
    /// A 2xx response whose body is not a result array
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Reasons a submit request is ignored. These are not reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("no files selected")]
    EmptySelection,
    #[error("a prediction request is already in flight")]
    InFlight,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid base URL {0:?}: expected an http:// or https:// address")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = PredictError::HttpStatus {
            status: 500,
            body: "model unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: model unavailable");
    }

    #[test]
    fn test_preview_error_message() {
        let err = PreviewReadError {
            failed: 1,
            total: 3,
            first: "#2: read aborted".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read 1 of 3 previews, first failure: #2: read aborted"
        );
    }
}
