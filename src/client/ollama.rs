//! Ollama generation backend.
//!
//! Issues one blocking `POST /api/generate` per prompt with streaming
//! disabled and returns the `response` field verbatim.

use crate::client::{ClientConfig, Generate};
use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Longest error body kept in [`ClientError::Status`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Blocking client for an Ollama server.
pub struct OllamaBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
}

impl OllamaBackend {
    /// Creates a backend from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Backend`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Backend(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: generate_endpoint(&config.base_url),
            model: config.model.clone(),
        })
    }

    /// The full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Generate for OllamaBackend {
    fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "Generating with Ollama");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                code: status.as_u16(),
                body: crate::io::char_prefix(&body, MAX_ERROR_BODY).to_string(),
            });
        }

        let body: GenerateResponse = response.json()?;
        debug!(model = %self.model, response_len = body.response.len(), "Generation complete");
        Ok(body.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn generate_endpoint(base_url: &str) -> String {
    format!("{}/api/generate", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_endpoint() {
        assert_eq!(
            generate_endpoint("http://localhost:11434"),
            "http://localhost:11434/api/generate"
        );
        assert_eq!(
            generate_endpoint("http://host:1/"),
            "http://host:1/api/generate"
        );
    }

    #[test]
    fn test_request_shape() {
        let req = GenerateRequest {
            model: "dolphin-llama3",
            prompt: "Summarize",
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "dolphin-llama3");
        assert_eq!(json["prompt"], "Summarize");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{"model":"m","created_at":"now","response":"short text","done":true}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "short text");
    }

    #[test]
    fn test_backend_uses_config() {
        let config = ClientConfig::default();
        let backend = OllamaBackend::new(&config).unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:11434/api/generate");
        assert_eq!(backend.model_name(), "dolphin-llama3");
    }
}
