//! Error types for the Immich client

use thiserror::Error;

/// Immich client errors
#[derive(Error, Debug)]
pub enum ImmichError {
    /// API request returned a non-success status
    #[error("Immich API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// API key could not be used as a header value
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
}

/// Result type for Immich client operations
pub type Result<T> = std::result::Result<T, ImmichError>;

impl From<reqwest::Error> for ImmichError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ImmichError::Parse(error.to_string())
        } else {
            ImmichError::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ImmichError::Api {
            status_code: 401,
            message: "Invalid API key".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Immich API error (status 401): Invalid API key"
        );
    }

    #[test]
    fn test_network_error_display() {
        let error = ImmichError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }
}
