//! # recursum
//!
//! Recursive document summarizer.
//!
//! recursum reduces an arbitrarily long document to a short summary. It
//! splits the text into overlapping pieces and summarizes each piece
//! through a text-generation service. The partial summaries are joined and
//! the process repeats on the result until it fits the target length or
//! the depth ceiling is reached.
//!
//! ## Features
//!
//! - **Splitting**: deterministic, character-based, with percentage overlap
//! - **Reduction**: bounded recursion (3 levels) with a terminal rollup and
//!   a full per-level trace
//! - **Clauses**: one-shot clause enumeration for legal documents
//! - **Ingestion**: PDF and UTF-8 text, with stopword preprocessing
//! - **Backends**: Ollama, OpenAI-compatible (feature `openai`), offline truncation

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod client;
pub mod core;
pub mod error;
pub mod io;
pub mod summarize;

// Re-export commonly used types at crate root
pub use error::{ClientError, Error, Result};

// Re-export core domain types
pub use core::{Piece, Reduction, SummarizationStep, Trace};

// Re-export splitting types
pub use chunking::{OverlapSplitter, split};

// Re-export client types
pub use client::{
    Backend, ClauseEnumerator, ClientConfig, DocumentClient, Generate, PromptSet,
    PromptedSummarizer, Summarizer, TruncateSummarizer, create_summarizer,
};

// Re-export reduction entry points
pub use summarize::{MAX_LEVEL, RecursiveReducer, extract_clauses};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
