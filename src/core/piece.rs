//! Piece representation.
//!
//! Pieces are contiguous, possibly overlapping substrings of a text buffer
//! produced by the splitter. Positions are measured in characters, not
//! bytes, so that sizing decisions stay stable for non-ASCII text.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A contiguous substring of a source text.
///
/// # Examples
///
/// ```
/// use recursum::core::Piece;
///
/// let piece = Piece::new(0, "Hello".to_string(), 0..5);
/// assert_eq!(piece.char_len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Sequential index within the split (0-based, left to right).
    pub index: usize,

    /// Piece content.
    pub content: String,

    /// Character range in the source text.
    pub char_range: Range<usize>,
}

impl Piece {
    /// Creates a new piece.
    #[must_use]
    pub const fn new(index: usize, content: String, char_range: Range<usize>) -> Self {
        Self {
            index,
            content,
            char_range,
        }
    }

    /// Returns the piece length in characters.
    #[must_use]
    pub const fn char_len(&self) -> usize {
        self.char_range.end - self.char_range.start
    }

    /// Returns the start offset (in characters) within the source.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.char_range.start
    }

    /// Returns the end offset (in characters, exclusive) within the source.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.char_range.end
    }

    /// Returns the number of characters shared with the following piece.
    #[must_use]
    pub const fn overlap_with(&self, next: &Self) -> usize {
        self.char_range.end.saturating_sub(next.char_range.start)
    }

    /// Returns a short preview of the content, cut on a character boundary.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> &str {
        crate::io::unicode::char_prefix(&self.content, max_chars)
    }
}
