//! CLI layer for recursum.
//!
//! Provides the command-line interface using clap, with commands for
//! summarizing documents, extracting clauses, inspecting splits, and
//! managing prompt templates.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
