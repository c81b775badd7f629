//! Error types for the Gemini client.

use thiserror::Error;
use tug_core::GuidanceError;

/// Errors that can occur while calling the Gemini API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeminiError {
    /// No API key was found in the environment.
    #[error("Gemini client is not configured: no API key")]
    NotConfigured,

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("Gemini API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the API.
        message: String,
    },

    /// Too many requests.
    #[error("Gemini API rate limit exceeded, retry after {retry_after} seconds")]
    RateLimited {
        /// Seconds until the quota resets.
        retry_after: u64,
    },

    /// The response carried no text.
    #[error("Gemini returned no text")]
    EmptyResponse,

    /// Failed to parse JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// JSON parsed but does not match the expected fields.
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

impl GeminiError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotConfigured => "Guidance is unavailable. Set GEMINI_API_KEY and restart the app.",
            Self::Network(_) => {
                "Could not reach the guidance service. Please check your internet connection."
            }
            Self::RateLimited { .. } => "The guidance service is busy. Please try again later.",
            Self::Api { .. } | Self::EmptyResponse | Self::JsonParse(_) | Self::Malformed(_) => {
                "The guidance service returned an unexpected answer."
            }
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<GeminiError> for GuidanceError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::NotConfigured => Self::NotConfigured,
            GeminiError::EmptyResponse | GeminiError::JsonParse(_) | GeminiError::Malformed(_) => {
                Self::MalformedResponse {
                    reason: err.to_string(),
                }
            }
            _ => Self::Provider {
                reason: err.to_string(),
            },
        }
    }
}

/// Result type alias for Gemini operations.
pub type Result<T> = std::result::Result<T, GeminiError>;
