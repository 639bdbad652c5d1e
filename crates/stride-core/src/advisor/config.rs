//! Configuration for the advisory text service.

use std::time::Duration;

/// Default model used for advisory text.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default API endpoint for advisory text.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Connection settings for the advisory text service.
///
/// The service is enabled only when an API key is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl AdvisorConfig {
    /// True when an API key is set and non-blank.
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = AdvisorConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_blank_key_is_disabled() {
        let config = AdvisorConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.is_enabled());

        let config = AdvisorConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(config.is_enabled());
    }
}
