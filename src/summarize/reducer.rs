//! Recursive chunk-summarize-merge reduction.
//!
//! Each level re-derives its piece size from the input length, splits the
//! input with a 10% overlap, summarizes every piece in order, and joins the
//! summaries with single spaces. If the merged text is still longer than the
//! level's target and the depth ceiling has not been reached, the merged text
//! becomes the next level's input, and that level's normalized piece size
//! becomes the next level's target. A terminal level with more than one piece
//! gets a final rollup call so the answer is one coherent summary.
//!
//! Depth is capped at [`MAX_LEVEL`] whether or not the summarizer actually
//! shrinks its input, so a reduction always terminates; the final summary may
//! still exceed the target when the summarizer fails to condense.

use crate::chunking::{DEFAULT_OVERLAP_PERCENT, OverlapSplitter};
use crate::client::Summarizer;
use crate::core::{Piece, Reduction, SummarizationStep};
use crate::error::{Error, Result, SplitError};
use crate::io::char_len;
use tracing::{debug, info, warn};

/// Deepest level the reducer will run.
pub const MAX_LEVEL: usize = 3;

/// Default target length in characters for the reduced text.
pub const DEFAULT_TARGET_PIECE_LENGTH: usize = 1500;

/// Piece size actually used for a level.
///
/// `expected = len / target` pieces (real-valued), then
/// `floor(len / expected) + 2`. The result is `target + 1` or `target + 2`
/// depending on floating-point rounding. An empty input yields `target + 2`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn normalized_piece_length(char_len: usize, target_piece_length: usize) -> usize {
    if char_len == 0 {
        return target_piece_length.saturating_add(2);
    }
    let len = char_len as f64;
    let expected_pieces = len / target_piece_length as f64;
    ((len / expected_pieces).floor() as usize).saturating_add(2)
}

/// Drives the per-level reduction against a [`Summarizer`].
///
/// # Examples
///
/// ```
/// use recursum::client::TruncateSummarizer;
/// use recursum::summarize::RecursiveReducer;
///
/// let reducer = RecursiveReducer::new(&TruncateSummarizer);
/// let reduction = reducer.reduce_document("short text", 100).unwrap();
/// assert_eq!(reduction.trace.depth(), 1);
/// assert_eq!(reduction.summary(), "short text");
/// ```
pub struct RecursiveReducer<'a, S: ?Sized> {
    summarizer: &'a S,
}

impl<'a, S: Summarizer + ?Sized> RecursiveReducer<'a, S> {
    /// Creates a reducer over the given summarizer.
    #[must_use]
    pub const fn new(summarizer: &'a S) -> Self {
        Self { summarizer }
    }

    /// Reduces a whole document, starting at level 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `target_piece_length` is zero.
    pub fn reduce_document(&self, text: &str, target_piece_length: usize) -> Result<Reduction> {
        self.reduce(text, target_piece_length, 1)
    }

    /// Reduces `text` starting at the given level.
    ///
    /// A deeper level is called with this level's normalized piece length as
    /// its target, so its termination test and rollup use that length.
    ///
    /// Summarizer failures never abort the reduction: a failed piece gets an
    /// empty summary and a failed rollup keeps the merged text.
    ///
    /// # Errors
    ///
    /// Returns an error if `target_piece_length` or `level` is zero.
    pub fn reduce(&self, text: &str, target_piece_length: usize, level: usize) -> Result<Reduction> {
        if target_piece_length == 0 {
            return Err(SplitError::InvalidTarget.into());
        }
        if level == 0 {
            return Err(Error::InvalidState {
                message: "levels are numbered from 1".to_string(),
            });
        }

        let len = char_len(text);
        info!(level, chars = len, "Recursion level");

        if len == 0 {
            return Ok(Reduction::terminal(SummarizationStep::empty(level)?));
        }

        let piece_length = normalized_piece_length(len, target_piece_length);
        let pieces = OverlapSplitter::new(piece_length, DEFAULT_OVERLAP_PERCENT)?.split(text);
        info!(level, pieces = pieces.len(), piece_length, "Split level");

        let piece_target = piece_length / 2;
        let summaries = pieces
            .iter()
            .map(|piece| self.summarize_piece(piece, pieces.len(), piece_target))
            .collect();

        let step = SummarizationStep::new(level, pieces, summaries)?;

        if char_len(step.final_summary()) > target_piece_length && level < MAX_LEVEL {
            info!(level, "Concatenated summary is too long. Starting next recursion level.");
            let deeper = self.reduce(step.final_summary(), piece_length, level + 1)?;
            return Ok(Reduction::nest(step, deeper));
        }

        let step = if step.piece_count() > 1 {
            self.rollup(step, target_piece_length)
        } else {
            step
        };

        Ok(Reduction::terminal(step))
    }

    fn summarize_piece(&self, piece: &Piece, total: usize, target_chars: usize) -> String {
        debug!(
            piece = piece.index + 1,
            total,
            chars = piece.char_len(),
            "Processing piece"
        );
        self.summarizer
            .summarize(&piece.content, target_chars)
            .unwrap_or_else(|e| {
                warn!(piece = piece.index + 1, error = %e, "Summarizer call failed; using empty summary");
                String::new()
            })
    }

    fn rollup(&self, step: SummarizationStep, target_chars: usize) -> SummarizationStep {
        info!(level = step.level(), pieces = step.piece_count(), "Rolling up terminal level");
        match self.summarizer.summarize(step.final_summary(), target_chars) {
            Ok(summary) => step.with_rollup(summary),
            Err(e) => {
                warn!(level = step.level(), error = %e, "Rollup call failed; keeping merged summaries");
                step
            }
        }
    }
}
