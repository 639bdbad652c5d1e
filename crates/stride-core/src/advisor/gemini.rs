//! Gemini `generateContent` client for advisory text.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::{AdvisorConfig, AdvisorError, TextGenerator};

/// Gemini REST API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::NotConfigured`] when the config has no API key.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if config.is_enabled() => key.trim().to_string(),
            _ => return Err(AdvisorError::NotConfigured),
        };

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(AdvisorError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        debug!("Requesting advisory text from model {}", self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        parsed
            .first_text()
            .ok_or_else(|| AdvisorError::InvalidResponse("response has no text candidate".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .find_map(|part| part.text)
    }
}

#[cfg(test)]
mod tests {
    use httptest::{Expectation, Server, matchers::*, responders::*};

    use super::*;

    fn client_for(server: &Server) -> GeminiClient {
        GeminiClient::from_config(&AdvisorConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.url_str(""),
            ..AdvisorConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn generate_happy_path() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/models/gemini-pro:generateContent"),
                request::query(url_decoded(contains(("key", "test-key")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "candidates": [
                    {"content": {"parts": [{"text": "Book the venue first."}]}}
                ]
            }))),
        );

        let text = client_for(&server).generate("prompt").await.unwrap();
        assert_eq!(text, "Book the venue first.");
    }

    #[tokio::test]
    async fn generate_maps_http_errors() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1beta/models/gemini-pro:generateContent",
            ))
            .respond_with(status_code(500).body("oops")),
        );

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, AdvisorError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn generate_rejects_empty_candidates() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1beta/models/gemini-pro:generateContent",
            ))
            .respond_with(json_encoded(serde_json::json!({"candidates": []}))),
        );

        let err = client_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidResponse(_)));
    }

    #[test]
    fn from_config_requires_key() {
        let err = GeminiClient::from_config(&AdvisorConfig::default()).err();
        assert!(matches!(err, Some(AdvisorError::NotConfigured)));
    }
}
