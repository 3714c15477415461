//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Piece, Reduction, SummarizationStep};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Characters of piece content shown in text output.
const PREVIEW_CHARS: usize = 80;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a reduction trace, its final summary, and optional clauses.
#[must_use]
pub fn format_reduction(
    reduction: &Reduction,
    clauses: Option<&[String]>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_reduction_text(reduction, clauses),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ReductionOutput<'a> {
                levels: &'a [SummarizationStep],
                final_summary: &'a str,
                #[serde(skip_serializing_if = "Option::is_none")]
                clauses: Option<&'a [String]>,
            }
            format_json(&ReductionOutput {
                levels: reduction.trace.steps(),
                final_summary: reduction.summary(),
                clauses,
            })
        }
    }
}

fn format_reduction_text(reduction: &Reduction, clauses: Option<&[String]>) -> String {
    let mut output = String::new();

    for step in &reduction.trace {
        let header = format!("Level {} ({} pieces)", step.level(), step.piece_count());
        let _ = writeln!(output, "{header}");
        let _ = writeln!(output, "{}", "=".repeat(header.len()));

        for (piece, summary) in step.pairs() {
            let _ = writeln!(
                output,
                "  Piece {} [{}..{}] ({} chars)",
                piece.index + 1,
                piece.start(),
                piece.end(),
                piece.char_len()
            );
            let _ = writeln!(output, "    Text:    {}", preview(piece));
            let _ = writeln!(output, "    Summary: {}", single_line(summary));
        }

        let label = if step.rolled_up() {
            "Level summary (rolled up)"
        } else {
            "Level summary"
        };
        let _ = writeln!(output, "  {label}: {}\n", single_line(step.final_summary()));
    }

    output.push_str("Final summary\n");
    output.push_str("=============\n");
    let _ = writeln!(output, "{}", reduction.summary());

    if let Some(clauses) = clauses {
        output.push('\n');
        output.push_str(&format_clauses_text(clauses));
    }

    output
}

/// Formats an extracted clause list.
#[must_use]
pub fn format_clauses(clauses: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_clauses_text(clauses),
        OutputFormat::Json => format_json(&clauses),
    }
}

fn format_clauses_text(clauses: &[String]) -> String {
    if clauses.is_empty() {
        return "No clauses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Clauses\n");
    output.push_str("=======\n");
    for clause in clauses {
        let _ = writeln!(output, "  {clause}");
    }
    output
}

/// Formats the pieces a splitter produced.
#[must_use]
pub fn format_pieces(
    pieces: &[Piece],
    total_chars: usize,
    max_chars: usize,
    stride: usize,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(
                output,
                "{} pieces from {total_chars} chars (max {max_chars}, stride {stride})",
                pieces.len()
            );
            let _ = writeln!(output, "{:<6} {:<20} {:<8} Preview", "Index", "Range", "Chars");
            output.push_str(&"-".repeat(70));
            output.push('\n');
            for piece in pieces {
                let range = format!("{}..{}", piece.start(), piece.end());
                let _ = writeln!(
                    output,
                    "{:<6} {:<20} {:<8} {}",
                    piece.index,
                    range,
                    piece.char_len(),
                    truncate(&single_line(&piece.content), 40)
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct SplitOutput<'a> {
                total_chars: usize,
                max_chars: usize,
                stride: usize,
                pieces: &'a [Piece],
            }
            format_json(&SplitOutput {
                total_chars,
                max_chars,
                stride,
                pieces,
            })
        }
    }
}

/// Formats the result of writing prompt templates.
#[must_use]
pub fn format_prompts_written(dir: &std::path::Path, written: &[PathBuf], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if written.is_empty() {
                return format!("Prompt templates already present in {}\n", dir.display());
            }
            let mut output = String::new();
            for path in written {
                let _ = writeln!(output, "Wrote {}", path.display());
            }
            output
        }
        OutputFormat::Json => format_json(&serde_json::json!({
            "dir": dir,
            "written": written,
        })),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({
            "error": error.to_string(),
        })),
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

fn preview(piece: &Piece) -> String {
    let shown = piece.preview(PREVIEW_CHARS);
    if shown.len() < piece.content.len() {
        format!("{}...", single_line(shown))
    } else {
        single_line(shown)
    }
}

/// Collapses whitespace runs (including newlines) into single spaces.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string to `max_chars` characters with ellipsis.
fn truncate(s: &str, max_chars: usize) -> String {
    if crate::io::char_len(s) <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        crate::io::char_prefix(s, max_chars).to_string()
    } else {
        format!("{}...", crate::io::char_prefix(s, max_chars - 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reduction() -> Reduction {
        let pieces = vec![
            Piece::new(0, "first piece\nof text".to_string(), 0..19),
            Piece::new(1, "second".to_string(), 17..23),
        ];
        let step =
            SummarizationStep::new(1, pieces, vec!["one".to_string(), "two".to_string()]).unwrap();
        Reduction::terminal(step.with_rollup("both".to_string()))
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_reduction_text() {
        let out = format_reduction(&sample_reduction(), None, OutputFormat::Text);
        assert!(out.contains("Level 1 (2 pieces)"));
        assert!(out.contains("Piece 2 [17..23] (6 chars)"));
        assert!(out.contains("Text:    first piece of text"));
        assert!(out.contains("Summary: two"));
        assert!(out.contains("Level summary (rolled up): both"));
        assert!(out.ends_with("Final summary\n=============\nboth\n"));
    }

    #[test]
    fn test_format_reduction_json() {
        let clauses = vec!["1. Foo".to_string()];
        let out = format_reduction(&sample_reduction(), Some(&clauses), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["final_summary"], "both");
        assert_eq!(value["levels"][0]["summaries"][1], "two");
        assert_eq!(value["levels"][0]["rolled_up"], true);
        assert_eq!(value["clauses"][0], "1. Foo");
    }

    #[test]
    fn test_format_reduction_json_without_clauses() {
        let out = format_reduction(&sample_reduction(), None, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("clauses").is_none());
    }

    #[test]
    fn test_format_clauses() {
        let clauses = vec!["1. Foo".to_string(), "2. Bar".to_string()];
        let out = format_clauses(&clauses, OutputFormat::Text);
        assert!(out.contains("  1. Foo\n  2. Bar\n"));
        assert_eq!(format_clauses(&[], OutputFormat::Text), "No clauses found.\n");

        let json = format_clauses(&clauses, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1], "2. Bar");
    }

    #[test]
    fn test_format_pieces_text() {
        let pieces = vec![Piece::new(0, "abc".to_string(), 0..3)];
        let out = format_pieces(&pieces, 3, 10, 9, OutputFormat::Text);
        assert!(out.starts_with("1 pieces from 3 chars (max 10, stride 9)"));
        assert!(out.contains("0..3"));
    }

    #[test]
    fn test_format_error_json() {
        let err = Error::Config {
            message: "bad".to_string(),
        };
        let out = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "configuration error: bad");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("世界世界世界", 5), "世界...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n\n b\tc "), "a b c");
    }
}
