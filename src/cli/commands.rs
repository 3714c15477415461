//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::chunking::OverlapSplitter;
use crate::cli::output::{
    OutputFormat, format_clauses, format_pieces, format_prompts_written, format_reduction,
};
use crate::cli::parser::{Cli, Commands};
use crate::client::{DocumentClient, PromptSet, create_summarizer};
use crate::error::{CommandError, IoError, Result};
use crate::io::{char_len, load_document, preprocess};
use crate::summarize::{RecursiveReducer, extract_clauses};
use std::path::{Path, PathBuf};
use tracing::info;

/// Executes the CLI command.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Summarize {
            file,
            target_length,
            no_preprocess,
            clauses,
        } => cmd_summarize(cli, file, *target_length, *no_preprocess, *clauses, format),
        Commands::Clauses {
            file,
            no_preprocess,
        } => cmd_clauses(cli, file, *no_preprocess, format),
        Commands::Split {
            file,
            max_chars,
            overlap_percent,
            no_preprocess,
        } => cmd_split(file, *max_chars, *overlap_percent, *no_preprocess, format),
        Commands::Prompts { dir } => cmd_prompts(dir.as_deref(), format),
    }
}

/// Loads a document and optionally runs stopword preprocessing.
fn load_text(file: &Path, no_preprocess: bool) -> Result<String> {
    let document = load_document(file)?;
    info!(
        path = %document.source.display(),
        format = document.format.as_str(),
        chars = document.char_len(),
        "Loaded document"
    );

    if no_preprocess {
        return Ok(document.text);
    }

    let text = preprocess(&document.text);
    info!(chars = char_len(&text), "Preprocessed document");
    Ok(text)
}

/// Builds the backend client from global flags.
fn build_summarizer(cli: &Cli) -> Result<Box<dyn DocumentClient>> {
    let config = cli.client_config()?;
    let prompts = PromptSet::load(cli.prompt_dir.as_deref());
    create_summarizer(&config, prompts)
}

// ==================== Command Implementations ====================

fn cmd_summarize(
    cli: &Cli,
    file: &Path,
    target_length: usize,
    no_preprocess: bool,
    with_clauses: bool,
    format: OutputFormat,
) -> Result<String> {
    if target_length == 0 {
        return Err(
            CommandError::InvalidArgument("--target-length must be > 0".to_string()).into(),
        );
    }

    let text = load_text(file, no_preprocess)?;
    let summarizer = build_summarizer(cli)?;

    let reduction =
        RecursiveReducer::new(summarizer.as_ref()).reduce_document(&text, target_length)?;
    info!(
        levels = reduction.trace.depth(),
        chars = char_len(reduction.summary()),
        "Reduction complete"
    );

    let clauses = if with_clauses {
        Some(extract_clauses(summarizer.as_ref(), reduction.summary())?)
    } else {
        None
    };

    Ok(format_reduction(&reduction, clauses.as_deref(), format))
}

fn cmd_clauses(
    cli: &Cli,
    file: &Path,
    no_preprocess: bool,
    format: OutputFormat,
) -> Result<String> {
    let text = load_text(file, no_preprocess)?;
    let summarizer = build_summarizer(cli)?;
    let clauses = extract_clauses(summarizer.as_ref(), &text)?;
    Ok(format_clauses(&clauses, format))
}

fn cmd_split(
    file: &Path,
    max_chars: usize,
    overlap_percent: u8,
    no_preprocess: bool,
    format: OutputFormat,
) -> Result<String> {
    let splitter = OverlapSplitter::new(max_chars, overlap_percent)?;
    let text = load_text(file, no_preprocess)?;
    let pieces = splitter.split(&text);

    Ok(format_pieces(
        &pieces,
        char_len(&text),
        splitter.max_chars(),
        splitter.stride(),
        format,
    ))
}

fn cmd_prompts(dir: Option<&Path>, format: OutputFormat) -> Result<String> {
    let dir = dir
        .map(PathBuf::from)
        .or_else(PromptSet::default_dir)
        .ok_or_else(|| {
            CommandError::InvalidArgument(
                "cannot determine home directory; pass --dir".to_string(),
            )
        })?;

    std::fs::create_dir_all(&dir).map_err(|e| IoError::DirectoryFailed {
        path: dir.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    let written = PromptSet::write_defaults(&dir).map_err(|e| IoError::WriteFailed {
        path: dir.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(format_prompts_written(&dir, &written, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.txt");
        std::fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    fn make_cli(format: &str, command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: format.to_string(),
            backend: "truncate".to_string(),
            url: None,
            model: None,
            api_key: None,
            timeout: 30,
            prompt_dir: None,
            command,
        }
    }

    #[test]
    fn test_cmd_summarize_short_document() {
        let (_temp_dir, path) = setup("The buyer shall pay the price.");
        let cli = make_cli(
            "json",
            Commands::Summarize {
                file: path,
                target_length: 100,
                no_preprocess: true,
                clauses: false,
            },
        );

        let output = execute(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["final_summary"], "The buyer shall pay the price.");
        assert_eq!(value["levels"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_cmd_summarize_long_document_bounded() {
        let (_temp_dir, path) = setup(&"lorem ipsum dolor ".repeat(200));
        let cli = make_cli(
            "json",
            Commands::Summarize {
                file: path,
                target_length: 100,
                no_preprocess: true,
                clauses: true,
            },
        );

        let output = execute(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let levels = value["levels"].as_array().unwrap();
        assert!(!levels.is_empty() && levels.len() <= 3);
        assert!(value["clauses"].is_array());
    }

    #[test]
    fn test_cmd_summarize_zero_target() {
        let (_temp_dir, path) = setup("text");
        let cli = make_cli(
            "text",
            Commands::Summarize {
                file: path,
                target_length: 0,
                no_preprocess: false,
                clauses: false,
            },
        );
        assert!(matches!(
            execute(&cli),
            Err(Error::Command(CommandError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_cmd_summarize_unsupported_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.docx");
        std::fs::write(&path, "ignored").unwrap();
        let cli = make_cli(
            "text",
            Commands::Summarize {
                file: path,
                target_length: 100,
                no_preprocess: false,
                clauses: false,
            },
        );

        let err = execute(&cli).unwrap_err();
        assert!(err.to_string().contains("Please upload a PDF or TXT file"));
    }

    #[test]
    fn test_cmd_clauses() {
        let (_temp_dir, path) = setup("1. Payment\n\n2. Delivery\n");
        let cli = make_cli(
            "json",
            Commands::Clauses {
                file: path,
                no_preprocess: true,
            },
        );

        let output = execute(&cli).unwrap();
        let clauses: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(clauses, vec!["1. Payment", "2. Delivery"]);
    }

    #[test]
    fn test_cmd_split() {
        let (_temp_dir, path) = setup(&"a".repeat(250));
        let result = cmd_split(&path, 100, 10, true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["total_chars"], 250);
        assert_eq!(value["stride"], 90);
        assert_eq!(value["pieces"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_cmd_split_invalid_overlap() {
        let (_temp_dir, path) = setup("abc");
        let result = cmd_split(&path, 100, 100, true, OutputFormat::Text);
        assert!(matches!(result, Err(Error::Splitting(_))));
    }

    #[test]
    fn test_cmd_prompts() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("prompts");

        let output = cmd_prompts(Some(&dir), OutputFormat::Text).unwrap();
        assert!(output.contains("Wrote"));
        assert!(dir.join("summarize.md").exists());
        assert!(dir.join("clauses.md").exists());

        // Existing templates are left alone
        let output = cmd_prompts(Some(&dir), OutputFormat::Text).unwrap();
        assert!(output.contains("already present"));
    }
}
