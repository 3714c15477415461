//! Unicode utilities for text processing.
//!
//! All sizing in recursum is done in characters (Unicode scalar values).
//! These helpers translate character positions into byte offsets and
//! segment text into sentences and word tokens.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the length of `s` in characters.
///
/// # Examples
///
/// ```
/// use recursum::io::char_len;
///
/// assert_eq!(char_len("Hello 世界"), 8);
/// ```
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns the byte offset of every character start, plus `s.len()`.
///
/// The result always has `char_len(s) + 1` entries, so character range
/// `a..b` maps to bytes `offsets[a]..offsets[b]`.
#[must_use]
pub fn char_byte_offsets(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .collect()
}

/// Returns the first `max_chars` characters of `s`.
#[must_use]
pub fn char_prefix(s: &str, max_chars: usize) -> &str {
    s.char_indices()
        .nth(max_chars)
        .map_or(s, |(offset, _)| &s[..offset])
}

/// Splits text into trimmed, non-empty sentences (UAX #29 sentence bounds).
#[must_use]
pub fn split_sentences(s: &str) -> Vec<&str> {
    s.split_sentence_bounds()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Splits a sentence into word and punctuation tokens, dropping whitespace.
#[must_use]
pub fn word_tokens(s: &str) -> Vec<&str> {
    s.split_word_bounds()
        .filter(|token| !token.trim().is_empty())
        .collect()
}
