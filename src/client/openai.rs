//! OpenAI-compatible chat completion backend.
//!
//! `async-openai` is async-only; the backend owns a current-thread Tokio
//! runtime and blocks on each request so the [`Generate`] seam stays
//! synchronous.

use crate::client::{ClientConfig, Generate};
use crate::error::ClientError;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs};
use tokio::runtime::Runtime;
use tracing::debug;

/// Blocking wrapper over an OpenAI-compatible endpoint.
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
    model: String,
    runtime: Runtime,
}

impl OpenAiBackend {
    /// Creates a backend from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Backend`] if the runtime or HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut openai_config = OpenAIConfig::new().with_api_base(&config.base_url);
        if let Some(key) = &config.api_key {
            openai_config = openai_config.with_api_key(key);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Backend(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Backend(e.to_string()))?;

        Ok(Self {
            client: Client::with_config(openai_config).with_http_client(http),
            model: config.model.clone(),
            runtime,
        })
    }
}

impl Generate for OpenAiBackend {
    fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "Generating with OpenAI-compatible API");

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| ClientError::Backend(e.to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([message.into()])
            .build()
            .map_err(|e| ClientError::Backend(e.to_string()))?;

        let response = self
            .runtime
            .block_on(self.client.chat().create(request))
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ClientError::InvalidResponse("response has no message content".into()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
