//! Service status document.

use serde::{Deserialize, Serialize};

/// Health and capability report for the planning service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Always `online` while the service answers
    pub status: String,

    /// Whether an advisory text collaborator is configured
    pub ai_available: bool,

    /// Version of the planning engine
    pub version: String,
}

impl ServiceStatus {
    /// Status of a running engine.
    pub fn online(ai_available: bool) -> Self {
        Self {
            status: "online".to_string(),
            ai_available,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
