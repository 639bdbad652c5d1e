//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use log::info;

use super::Planner;
use crate::{
    advisor::{AdvisorConfig, GeminiClient, TextGenerator},
    error::{PlannerError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    advisor: Option<Arc<dyn TextGenerator>>,
    advisor_config: Option<AdvisorConfig>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings (no advisory text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given text generator for advisory text.
    ///
    /// Takes precedence over [`with_advisor_config`](Self::with_advisor_config).
    pub fn with_advisor(mut self, advisor: Arc<dyn TextGenerator>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    /// Configures the Gemini advisory client.
    ///
    /// A config without an API key leaves advisory text disabled.
    pub fn with_advisor_config(mut self, config: AdvisorConfig) -> Self {
        self.advisor_config = Some(config);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the advisory HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<Planner> {
        let advisor = match (self.advisor, self.advisor_config) {
            (Some(advisor), _) => Some(advisor),
            (None, Some(config)) if config.is_enabled() => {
                let client = GeminiClient::from_config(&config).map_err(|e| {
                    PlannerError::Configuration {
                        message: format!("Failed to create advisory client: {e}"),
                    }
                })?;
                info!("Advisory text enabled with model {}", config.model);
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            _ => {
                info!("Advisory text disabled");
                None
            }
        };

        Ok(Planner::new(advisor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::mock::ScriptedGenerator;

    #[test]
    fn test_default_builder_has_no_advisor() {
        let planner = PlannerBuilder::new().build().unwrap();
        assert!(!planner.ai_available());
    }

    #[test]
    fn test_config_without_key_stays_disabled() {
        let planner = PlannerBuilder::new()
            .with_advisor_config(AdvisorConfig::default())
            .build()
            .unwrap();
        assert!(!planner.ai_available());
    }

    #[test]
    fn test_config_with_key_enables_advisor() {
        let planner = PlannerBuilder::new()
            .with_advisor_config(AdvisorConfig {
                api_key: Some("key".to_string()),
                ..AdvisorConfig::default()
            })
            .build()
            .unwrap();
        assert!(planner.ai_available());
    }

    #[test]
    fn test_explicit_advisor_wins() {
        let planner = PlannerBuilder::new()
            .with_advisor(Arc::new(ScriptedGenerator::replying("hi")))
            .build()
            .unwrap();
        assert!(planner.ai_available());
    }
}
