//! Prompt templates sent to the generation service.
//!
//! Templates are plain text with two placeholders: `{target_chars}` (the
//! requested output length) and `{text}` (the material to process). They
//! are loaded from external files when available and fall back to the
//! compiled-in defaults otherwise.

use std::path::{Path, PathBuf};

/// Default instruction for summarizing one piece (or a rollup).
pub const SUMMARIZE_PROMPT: &str =
    "Summarize the following text in about {target_chars} characters:\n\n{text}";

/// Default instruction for enumerating clauses of a legal document.
pub const CLAUSES_PROMPT: &str = "Extract and list the main clauses and sub clauses from the following legal contract. Each clause should be on a new line with its sub clause:\n\n{text}";

/// Placeholder replaced by the requested output length.
pub const TARGET_PLACEHOLDER: &str = "{target_chars}";

/// Placeholder replaced by the input text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Environment variable naming the prompt directory.
pub const PROMPT_DIR_ENV: &str = "RECURSUM_PROMPT_DIR";

/// Default prompt directory under the user's home.
const DEFAULT_PROMPT_DIR: &str = ".config/recursum/prompts";

const SUMMARIZE_FILENAME: &str = "summarize.md";
const CLAUSES_FILENAME: &str = "clauses.md";

/// The prompt templates used by [`super::PromptedSummarizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    /// Template for piece and rollup summaries.
    pub summarize: String,
    /// Template for clause enumeration.
    pub clauses: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl PromptSet {
    /// Loads prompts from the given directory, falling back to compiled-in defaults.
    ///
    /// Resolution order for the directory:
    /// 1. Explicit `prompt_dir` argument (from `--prompt-dir`)
    /// 2. `RECURSUM_PROMPT_DIR` environment variable
    /// 3. `~/.config/recursum/prompts/`
    ///
    /// Each file is loaded independently; a missing file uses its default.
    #[must_use]
    pub fn load(prompt_dir: Option<&Path>) -> Self {
        let resolved_dir = prompt_dir
            .map(PathBuf::from)
            .or_else(|| std::env::var(PROMPT_DIR_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_dir);

        let load_file = |filename: &str, default: &str| -> String {
            resolved_dir
                .as_ref()
                .map(|dir| dir.join(filename))
                .and_then(|path| std::fs::read_to_string(path).ok())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            summarize: load_file(SUMMARIZE_FILENAME, SUMMARIZE_PROMPT),
            clauses: load_file(CLAUSES_FILENAME, CLAUSES_PROMPT),
        }
    }

    /// Returns compiled-in defaults without checking the filesystem.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            summarize: SUMMARIZE_PROMPT.to_string(),
            clauses: CLAUSES_PROMPT.to_string(),
        }
    }

    /// Writes the compiled-in default prompts to the given directory.
    ///
    /// Existing files are **not** overwritten.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if directory creation or file writing fails.
    pub fn write_defaults(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let templates = [
            (SUMMARIZE_FILENAME, SUMMARIZE_PROMPT),
            (CLAUSES_FILENAME, CLAUSES_PROMPT),
        ];

        let mut written = Vec::new();
        for (filename, content) in &templates {
            let path = dir.join(filename);
            if !path.exists() {
                std::fs::write(&path, content)?;
                written.push(path);
            }
        }
        Ok(written)
    }

    /// Returns the default prompt directory, if the home directory is known.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR))
    }

    /// Renders the summarization prompt.
    #[must_use]
    pub fn render_summarize(&self, text: &str, target_chars: usize) -> String {
        render(&self.summarize, text, Some(target_chars))
    }

    /// Renders the clause-enumeration prompt.
    #[must_use]
    pub fn render_clauses(&self, text: &str) -> String {
        render(&self.clauses, text, None)
    }
}

/// Substitutes the target first so placeholders inside `text` stay literal.
fn render(template: &str, text: &str, target_chars: Option<usize>) -> String {
    let template = target_chars.map_or_else(
        || template.to_string(),
        |target| template.replace(TARGET_PLACEHOLDER, &target.to_string()),
    );
    template.replace(TEXT_PLACEHOLDER, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_summarize() {
        let prompts = PromptSet::defaults();
        let prompt = prompts.render_summarize("Some text.", 750);
        assert_eq!(
            prompt,
            "Summarize the following text in about 750 characters:\n\nSome text."
        );
    }

    #[test]
    fn test_render_clauses() {
        let prompts = PromptSet::defaults();
        let prompt = prompts.render_clauses("1. Term");
        assert!(prompt.starts_with("Extract and list the main clauses"));
        assert!(prompt.ends_with("\n\n1. Term"));
    }

    #[test]
    fn test_render_keeps_placeholders_in_text_literal() {
        let prompts = PromptSet::defaults();
        let prompt = prompts.render_summarize("literal {target_chars}", 10);
        assert!(prompt.ends_with("literal {target_chars}"));
    }

    #[test]
    fn test_load_from_dir_with_partial_override() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(SUMMARIZE_FILENAME),
            "Condense to {target_chars}: {text}",
        )
        .unwrap();

        let prompts = PromptSet::load(Some(temp_dir.path()));
        assert_eq!(prompts.render_summarize("abc", 3), "Condense to 3: abc");
        assert_eq!(prompts.clauses, CLAUSES_PROMPT);
    }

    #[test]
    fn test_load_missing_dir_uses_defaults() {
        let prompts = PromptSet::load(Some(Path::new("/nonexistent/prompt/dir")));
        assert_eq!(prompts, PromptSet::defaults());
    }

    #[test]
    fn test_write_defaults_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join(CLAUSES_FILENAME);
        std::fs::write(&custom, "custom").unwrap();

        let written = PromptSet::write_defaults(temp_dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with(SUMMARIZE_FILENAME));
        assert_eq!(std::fs::read_to_string(&custom).unwrap(), "custom");
    }
}
