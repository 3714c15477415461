//! Offline summarizer that truncates instead of generating.
//!
//! Keeps the first `target_chars` characters of each input. Output is
//! deterministic and needs no running model, which makes it useful for
//! inspecting how a document decomposes across levels.

use crate::client::{ClauseEnumerator, Summarizer};
use crate::error::ClientError;
use crate::io::char_prefix;

/// Summarizer that returns a prefix of its input.
///
/// # Examples
///
/// ```
/// use recursum::client::{Summarizer, TruncateSummarizer};
///
/// let summarizer = TruncateSummarizer;
/// assert_eq!(summarizer.summarize("abcdef", 3).unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncateSummarizer;

impl Summarizer for TruncateSummarizer {
    fn summarize(&self, text: &str, target_chars: usize) -> Result<String, ClientError> {
        Ok(char_prefix(text, target_chars).to_string())
    }

    fn name(&self) -> &str {
        "truncate"
    }
}

/// Treats each line of the input as a clause.
impl ClauseEnumerator for TruncateSummarizer {
    fn enumerate_clauses(&self, text: &str) -> Result<String, ClientError> {
        Ok(text.to_string())
    }
}
