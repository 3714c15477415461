//! One-shot clause extraction for legal-style documents.

use crate::client::ClauseEnumerator;
use crate::error::Result;
use tracing::info;

/// Asks the client to enumerate the clauses of `text`.
///
/// The whole text is sent unsplit. Returns one entry per non-blank response
/// line, trimmed, in response order. Long documents may come back truncated;
/// that is not treated as an error.
///
/// # Errors
///
/// Returns [`crate::Error::Client`] if the client call fails.
///
/// # Examples
///
/// ```
/// use recursum::client::TruncateSummarizer;
/// use recursum::summarize::extract_clauses;
///
/// let clauses = extract_clauses(&TruncateSummarizer, "1. Term\n\n 2. Payment ").unwrap();
/// assert_eq!(clauses, vec!["1. Term", "2. Payment"]);
/// ```
pub fn extract_clauses<C: ClauseEnumerator + ?Sized>(client: &C, text: &str) -> Result<Vec<String>> {
    let response = client.enumerate_clauses(text)?;
    let clauses = parse_clause_lines(&response);
    info!(clauses = clauses.len(), "Extracted clauses");
    Ok(clauses)
}

/// Splits a response into trimmed, non-empty lines.
#[must_use]
pub fn parse_clause_lines(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
