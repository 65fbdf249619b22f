//! OllamaClient -- concrete [`InferenceClient`] for an Ollama-compatible backend.
//!
//! Sends one non-streaming request to `{base_url}/api/generate` per turn. No
//! retries and no timeout beyond reqwest's defaults; every failure becomes an
//! [`InferenceOutcome::Degraded`].

use chatline_core::llm::client::InferenceClient;
use chatline_types::error::InferenceError;
use chatline_types::llm::{GenerateRequest, GenerateResponse, InferenceOutcome};

/// Ollama `/api/generate` client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:11434`).
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request_reply(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = GenerateRequest::new(&self.model, prompt);

        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Deserialization(format!("failed to parse response: {e}")))?;

        generated.response.ok_or(InferenceError::MissingReply)
    }
}

impl InferenceClient for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> InferenceOutcome {
        tracing::debug!(model = %self.model, url = %self.base_url, "Calling inference backend");
        match self.request_reply(prompt).await {
            Ok(text) => InferenceOutcome::Reply(text),
            Err(cause) => InferenceOutcome::degraded(cause),
        }
    }
}
