//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::chunking::{DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_PERCENT};
use crate::client::{Backend, ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recursum: recursive document summarizer.
///
/// Splits long documents into overlapping pieces, summarizes each piece
/// through a text-generation service, and repeats on the merged result
/// until it is short enough.
#[derive(Parser, Debug)]
#[command(name = "recursum")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Generation backend (ollama, openai, truncate).
    #[arg(long, env = "RECURSUM_BACKEND", default_value = "ollama", global = true)]
    pub backend: String,

    /// Service base URL (defaults to the backend's usual endpoint).
    #[arg(long, env = "RECURSUM_URL", global = true)]
    pub url: Option<String>,

    /// Model name.
    #[arg(long, env = "RECURSUM_MODEL", global = true)]
    pub model: Option<String>,

    /// API key for OpenAI-compatible services.
    #[arg(long, env = "RECURSUM_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Directory holding `summarize.md` / `clauses.md` prompt templates.
    #[arg(long, env = "RECURSUM_PROMPT_DIR", global = true)]
    pub prompt_dir: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a PDF or TXT document and print every level.
    Summarize {
        /// Path to the document.
        file: PathBuf,

        /// Target length of the summary in characters.
        #[arg(short, long, default_value = "1500")]
        target_length: usize,

        /// Skip sentence segmentation and stopword removal.
        #[arg(long)]
        no_preprocess: bool,

        /// Also list the clauses of the final summary.
        #[arg(long)]
        clauses: bool,
    },

    /// List the clauses and sub-clauses of a legal document.
    Clauses {
        /// Path to the document.
        file: PathBuf,

        /// Skip sentence segmentation and stopword removal.
        #[arg(long)]
        no_preprocess: bool,
    },

    /// Show how a document splits into pieces (no service calls).
    Split {
        /// Path to the document.
        file: PathBuf,

        /// Piece size in characters.
        #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
        max_chars: usize,

        /// Overlap between pieces, percent of the piece size.
        #[arg(long, default_value_t = DEFAULT_OVERLAP_PERCENT)]
        overlap_percent: u8,

        /// Skip sentence segmentation and stopword removal.
        #[arg(long)]
        no_preprocess: bool,
    },

    /// Write the default prompt templates for customization.
    Prompts {
        /// Target directory (defaults to ~/.config/recursum/prompts).
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Builds the generation-service configuration from flags and env.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend name.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let backend = Backend::parse(&self.backend)?;
        Ok(ClientConfig::for_backend(backend)
            .base_url(self.url.as_deref())
            .model(self.model.as_deref())
            .api_key(self.api_key.as_deref())
            .timeout_secs(self.timeout))
    }
}
