//! Generation-service boundary.
//!
//! The reducer talks to the outside world through [`Summarizer`] only; the
//! clause extractor uses [`ClauseEnumerator`]. Production clients are a
//! [`PromptedSummarizer`] that renders a [`PromptSet`] template and hands
//! the prompt to a [`Generate`] backend (Ollama, or an OpenAI-compatible
//! API with the `openai` feature). [`TruncateSummarizer`] is an offline
//! stand-in.

mod ollama;
#[cfg(feature = "openai")]
mod openai;
pub mod prompt;
mod truncate;

pub use ollama::OllamaBackend;
#[cfg(feature = "openai")]
pub use openai::OpenAiBackend;
pub use prompt::PromptSet;
pub use truncate::TruncateSummarizer;

use crate::error::{ClientError, Error, Result};
use std::time::Duration;

/// Default Ollama server.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default model for the Ollama backend.
pub const DEFAULT_OLLAMA_MODEL: &str = "dolphin-llama3";

/// Default OpenAI-compatible API base.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default model for the OpenAI-compatible backend.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Turns text into shorter text.
///
/// Calls may fail and are not assumed deterministic. Implementations do not
/// need to honor `target_chars` exactly; it is a hint.
pub trait Summarizer {
    /// Summarizes `text` in roughly `target_chars` characters.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or service failure.
    fn summarize(&self, text: &str, target_chars: usize) -> std::result::Result<String, ClientError>;

    /// Short name used in logs and output.
    fn name(&self) -> &str {
        "summarizer"
    }
}

impl<S: Summarizer + ?Sized> Summarizer for Box<S> {
    fn summarize(&self, text: &str, target_chars: usize) -> std::result::Result<String, ClientError> {
        (**self).summarize(text, target_chars)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Lists the clauses of a legal document.
pub trait ClauseEnumerator {
    /// Lists the clauses and sub-clauses of `text`, one per line.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or service failure.
    fn enumerate_clauses(&self, text: &str) -> std::result::Result<String, ClientError>;
}

impl<C: ClauseEnumerator + ?Sized> ClauseEnumerator for Box<C> {
    fn enumerate_clauses(&self, text: &str) -> std::result::Result<String, ClientError> {
        (**self).enumerate_clauses(text)
    }
}

/// Everything the CLI needs from one configured backend.
pub trait DocumentClient: Summarizer + ClauseEnumerator {}

impl<T: Summarizer + ClauseEnumerator + ?Sized> DocumentClient for T {}

/// A text-generation backend: prompt in, completion out.
pub trait Generate {
    /// Sends one prompt and returns the raw completion.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or service failure.
    fn generate(&self, prompt: &str) -> std::result::Result<String, ClientError>;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

/// [`Summarizer`] that renders prompt templates for a [`Generate`] backend.
pub struct PromptedSummarizer<G> {
    backend: G,
    prompts: PromptSet,
}

impl<G: Generate> PromptedSummarizer<G> {
    /// Wraps a backend with the given prompt templates.
    #[must_use]
    pub const fn new(backend: G, prompts: PromptSet) -> Self {
        Self { backend, prompts }
    }

    /// The prompt templates in use.
    #[must_use]
    pub const fn prompts(&self) -> &PromptSet {
        &self.prompts
    }
}

impl<G: Generate> Summarizer for PromptedSummarizer<G> {
    fn summarize(&self, text: &str, target_chars: usize) -> std::result::Result<String, ClientError> {
        self.backend
            .generate(&self.prompts.render_summarize(text, target_chars))
    }

    fn name(&self) -> &str {
        self.backend.model_name()
    }
}

impl<G: Generate> ClauseEnumerator for PromptedSummarizer<G> {
    fn enumerate_clauses(&self, text: &str) -> std::result::Result<String, ClientError> {
        self.backend.generate(&self.prompts.render_clauses(text))
    }
}

/// Which generation backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Ollama `/api/generate`.
    #[default]
    Ollama,
    /// OpenAI-compatible chat completions (requires the `openai` feature).
    OpenAi,
    /// Offline truncation, no service involved.
    Truncate,
}

impl Backend {
    /// Parses a backend name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for unknown names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAi),
            "truncate" => Ok(Self::Truncate),
            _ => Err(Error::Config {
                message: format!(
                    "unknown backend: {name} (available: {})",
                    available_backends().join(", ")
                ),
            }),
        }
    }

    /// Default base URL for this backend.
    #[must_use]
    pub const fn default_url(self) -> &'static str {
        match self {
            Self::Ollama | Self::Truncate => DEFAULT_OLLAMA_URL,
            Self::OpenAi => DEFAULT_OPENAI_URL,
        }
    }

    /// Default model for this backend.
    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Ollama | Self::Truncate => DEFAULT_OLLAMA_MODEL,
            Self::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }
}

/// Lists available backend names.
#[must_use]
pub fn available_backends() -> Vec<&'static str> {
    vec!["ollama", "openai", "truncate"]
}

/// Connection settings for the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend kind.
    pub backend: Backend,
    /// Service base URL.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// API key (OpenAI-compatible backends only).
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_backend(Backend::Ollama)
    }
}

impl ClientConfig {
    /// Default settings for a backend.
    #[must_use]
    pub fn for_backend(backend: Backend) -> Self {
        Self {
            backend,
            base_url: backend.default_url().to_string(),
            model: backend.default_model().to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the base URL when one is given.
    #[must_use]
    pub fn base_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            self.base_url = url.to_string();
        }
        self
    }

    /// Overrides the model when one is given.
    #[must_use]
    pub fn model(mut self, model: Option<&str>) -> Self {
        if let Some(model) = model {
            self.model = model.to_string();
        }
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: Option<&str>) -> Self {
        self.api_key = key.map(str::to_string);
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty URL or model, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config {
                message: "service URL must not be empty".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(Error::Config {
                message: "model must not be empty".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(Error::Config {
                message: "timeout must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Creates a summarizer for the configured backend.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the backend cannot be
/// initialized, or the backend was not compiled in.
pub fn create_summarizer(
    config: &ClientConfig,
    prompts: PromptSet,
) -> Result<Box<dyn DocumentClient>> {
    config.validate()?;

    match config.backend {
        Backend::Ollama => Ok(Box::new(PromptedSummarizer::new(
            OllamaBackend::new(config)?,
            prompts,
        ))),
        #[cfg(feature = "openai")]
        Backend::OpenAi => Ok(Box::new(PromptedSummarizer::new(
            OpenAiBackend::new(config)?,
            prompts,
        ))),
        #[cfg(not(feature = "openai"))]
        Backend::OpenAi => {
            let _ = prompts;
            Err(Error::Config {
                message: "openai backend not compiled in; rebuild with --features openai"
                    .to_string(),
            })
        }
        Backend::Truncate => Ok(Box::new(TruncateSummarizer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingBackend {
        prompts: RefCell<Vec<String>>,
        reply: &'static str,
    }

    impl Generate for RecordingBackend {
        fn generate(&self, prompt: &str) -> std::result::Result<String, ClientError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.to_string())
        }

        fn model_name(&self) -> &str {
            "recording"
        }
    }

    fn recording(reply: &'static str) -> RecordingBackend {
        RecordingBackend {
            prompts: RefCell::new(Vec::new()),
            reply,
        }
    }

    #[test]
    fn test_prompted_summarizer_renders_target() {
        let summarizer = PromptedSummarizer::new(recording("ok"), PromptSet::defaults());
        let out = summarizer.summarize("piece text", 51).unwrap();
        assert_eq!(out, "ok");

        let sent = summarizer.backend.prompts.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("about 51 characters"));
        assert!(sent[0].ends_with("piece text"));
        assert_eq!(summarizer.name(), "recording");
    }

    #[test]
    fn test_prompted_summarizer_clause_prompt() {
        let summarizer = PromptedSummarizer::new(recording("1. A"), PromptSet::defaults());
        summarizer.enumerate_clauses("contract").unwrap();
        let sent = summarizer.backend.prompts.borrow();
        assert!(sent[0].contains("clauses and sub clauses"));
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(Backend::parse("ollama").unwrap(), Backend::Ollama);
        assert_eq!(Backend::parse("OpenAI").unwrap(), Backend::OpenAi);
        assert_eq!(Backend::parse("truncate").unwrap(), Backend::Truncate);
        let err = Backend::parse("bard").unwrap_err();
        assert!(err.to_string().contains("available: ollama, openai, truncate"));
    }

    #[test]
    fn test_config_defaults_per_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_OLLAMA_URL);
        assert_eq!(config.model, DEFAULT_OLLAMA_MODEL);

        let config = ClientConfig::for_backend(Backend::OpenAi);
        assert_eq!(config.base_url, DEFAULT_OPENAI_URL);
        assert_eq!(config.model, DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn test_config_overrides() {
        let config = ClientConfig::default()
            .base_url(Some("http://gpu:11434"))
            .model(None)
            .api_key(Some("k"))
            .timeout_secs(5);
        assert_eq!(config.base_url, "http://gpu:11434");
        assert_eq!(config.model, DEFAULT_OLLAMA_MODEL);
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().base_url(Some(" ")).validate().is_err());
        assert!(ClientConfig::default().model(Some("")).validate().is_err());
        assert!(ClientConfig::default().timeout_secs(0).validate().is_err());
    }

    #[test]
    fn test_create_truncate_summarizer() {
        let config = ClientConfig::for_backend(Backend::Truncate);
        let summarizer = create_summarizer(&config, PromptSet::defaults()).unwrap();
        assert_eq!(summarizer.name(), "truncate");
        assert_eq!(summarizer.summarize("abcdef", 2).unwrap(), "ab");
        assert_eq!(summarizer.enumerate_clauses("1. A").unwrap(), "1. A");
    }

    #[test]
    fn test_summarize_only_type_is_a_summarizer() {
        struct Upper;

        impl Summarizer for Upper {
            fn summarize(&self, text: &str, _: usize) -> std::result::Result<String, ClientError> {
                Ok(text.to_uppercase())
            }
        }

        let boxed: Box<dyn Summarizer> = Box::new(Upper);
        assert_eq!(boxed.summarize("abc", 3).unwrap(), "ABC");
        assert_eq!(boxed.name(), "summarizer");
    }

    #[cfg(not(feature = "openai"))]
    #[test]
    fn test_openai_requires_feature() {
        let config = ClientConfig::for_backend(Backend::OpenAi);
        let result = create_summarizer(&config, PromptSet::defaults());
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
