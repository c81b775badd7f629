//! Error types shared by every guidance feature.

use thiserror::Error;

/// Errors surfaced by providers and by input validation.
///
/// Views never show the `Display` text of these errors. They log it and
/// show either [`GuidanceError::user_message`] or the fixed failure message
/// of the feature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GuidanceError {
    /// User input was rejected before any provider call.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the rejected input.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The provider failed to answer.
    #[error("provider error: {reason}")]
    Provider { reason: String },

    /// The provider answered but the answer does not have the expected shape.
    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String },

    /// No provider client is available (for example, a missing API key).
    #[error("provider is not configured")]
    NotConfigured,

    /// The platform cannot perform the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported { capability: &'static str },
}

impl GuidanceError {
    /// Shorthand for a validation error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for a malformed-response error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { reason, .. } => reason.clone(),
            Self::Provider { .. } | Self::MalformedResponse { .. } => {
                "The cosmos is not responding right now. Please try again.".to_string()
            }
            Self::NotConfigured => {
                "Guidance is unavailable. Set GEMINI_API_KEY and restart the app.".to_string()
            }
            Self::Unsupported { capability } => {
                format!("{capability} is not available on this device.")
            }
        }
    }
}

/// Result type alias for guidance operations.
pub type Result<T> = std::result::Result<T, GuidanceError>;
