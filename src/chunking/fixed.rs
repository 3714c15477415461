//! Fixed-size overlapping splitter.
//!
//! Splits text into pieces of at most `max_chars` characters, where each
//! piece starts `stride = max_chars - overlap` characters after the previous
//! one. All positions are character offsets; slicing always lands on UTF-8
//! boundaries.

use crate::chunking::{DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_PERCENT};
use crate::core::Piece;
use crate::error::{Result, SplitError};
use crate::io::unicode::char_byte_offsets;

/// Fixed-size splitter with percentage overlap.
///
/// # Examples
///
/// ```
/// use recursum::chunking::OverlapSplitter;
///
/// let splitter = OverlapSplitter::new(10, 20).unwrap();
/// let pieces = splitter.split("0123456789ABCDEFGHIJ");
/// assert_eq!(pieces.len(), 3);
/// assert_eq!(pieces[1].content, "89ABCDEFGH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapSplitter {
    max_chars: usize,
    overlap_percent: u8,
    stride: usize,
}

impl Default for OverlapSplitter {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap_percent: DEFAULT_OVERLAP_PERCENT,
            stride: DEFAULT_MAX_CHARS - overlap_chars(DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_PERCENT),
        }
    }
}

impl OverlapSplitter {
    /// Creates a splitter, validating that it can make progress.
    ///
    /// # Arguments
    ///
    /// * `max_chars` - Piece size target in characters.
    /// * `overlap_percent` - Overlap as a percentage of `max_chars`, in `[0, 100)`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] if `max_chars` is zero and
    /// [`SplitError::OverlapTooLarge`] if the stride would be below one.
    pub fn new(max_chars: usize, overlap_percent: u8) -> Result<Self> {
        if max_chars == 0 {
            return Err(SplitError::InvalidConfig {
                reason: "max_chars must be > 0".to_string(),
            }
            .into());
        }
        if overlap_percent >= 100 {
            return Err(SplitError::OverlapTooLarge {
                percent: overlap_percent,
            }
            .into());
        }
        let stride = max_chars - overlap_chars(max_chars, overlap_percent);
        if stride == 0 {
            return Err(SplitError::OverlapTooLarge {
                percent: overlap_percent,
            }
            .into());
        }
        Ok(Self {
            max_chars,
            overlap_percent,
            stride,
        })
    }

    /// Piece size target in characters.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Configured overlap percentage.
    #[must_use]
    pub const fn overlap_percent(&self) -> u8 {
        self.overlap_percent
    }

    /// Characters shared by consecutive full-size pieces.
    #[must_use]
    pub const fn overlap_chars(&self) -> usize {
        self.max_chars - self.stride
    }

    /// Distance in characters between consecutive piece starts.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Splits `text` into ordered, overlapping pieces.
    ///
    /// Empty text yields no pieces. The last piece is clipped at the end of
    /// the text and may be shorter than `max_chars`; a trailing piece that
    /// lies entirely inside its predecessor's overlap is still emitted.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Piece> {
        let offsets = char_byte_offsets(text);
        let len = offsets.len() - 1;

        (0..len)
            .step_by(self.stride)
            .enumerate()
            .map(|(index, start)| {
                let end = start.saturating_add(self.max_chars).min(len);
                let content = text[offsets[start]..offsets[end]].to_string();
                Piece::new(index, content, start..end)
            })
            .collect()
    }

    /// Number of pieces [`Self::split`] produces for a text of `char_len` characters.
    #[must_use]
    pub const fn piece_count(&self, char_len: usize) -> usize {
        char_len.div_ceil(self.stride)
    }
}

/// `floor(max_chars * percent / 100)`, computed without overflow.
const fn overlap_chars(max_chars: usize, percent: u8) -> usize {
    let percent = percent as usize;
    max_chars / 100 * percent + max_chars % 100 * percent / 100
}

/// Splits `text` into overlapping pieces of at most `max_chars` characters.
///
/// # Errors
///
/// Returns an error if `max_chars` is zero or `overlap_percent >= 100`.
pub fn split(text: &str, max_chars: usize, overlap_percent: u8) -> Result<Vec<Piece>> {
    Ok(OverlapSplitter::new(max_chars, overlap_percent)?.split(text))
}
