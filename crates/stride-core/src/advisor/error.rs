//! Advisory collaborator error types

use thiserror::Error;

/// Errors that can occur while requesting advisory text.
///
/// These never reach callers of the planner; they are logged and replaced by
/// an empty annotation.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Advisory service is not configured")]
    NotConfigured,

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
