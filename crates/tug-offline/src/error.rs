//! Offline cache error types.

use std::path::PathBuf;

use thiserror::Error;

/// Offline cache operation error.
#[derive(Debug, Error)]
pub enum CacheError {
    /// File I/O error.
    #[error("Failed to {operation} cache file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache names become directory names and must be plain.
    #[error("Invalid cache name: {0:?}")]
    InvalidCacheName(String),

    /// A manifest entry could not be resolved to an absolute URL.
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The network request failed.
    #[error("Failed to fetch {url}: {reason}")]
    Network { url: String, reason: String },

    /// A manifest entry answered with a non-200 status during install.
    #[error("Unexpected status {status} for {url}")]
    BadStatus { url: String, status: u16 },

    /// Entry metadata is unreadable.
    #[error("Corrupt cache metadata")]
    Metadata {
        #[source]
        source: serde_json::Error,
    },

    /// A blocking cache task panicked or was cancelled.
    #[error("Cache task failed: {0}")]
    Task(String),
}

impl CacheError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the offline file at {}", operation, path.display())
            }
            Self::Network { .. } | Self::BadStatus { .. } => {
                "This content is not available offline yet. Connect to the internet and try again."
                    .to_string()
            }
            Self::InvalidCacheName(_) | Self::InvalidUrl { .. } => {
                "The offline cache is misconfigured.".to_string()
            }
            Self::Metadata { .. } | Self::Task(_) => {
                "The offline cache is damaged. It will be rebuilt on the next start.".to_string()
            }
        }
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
