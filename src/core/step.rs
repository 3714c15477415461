//! Per-level reduction records.
//!
//! A [`SummarizationStep`] captures one level of the recursive reduction:
//! the pieces the level split its input into, the summary produced for
//! each piece, and the merged text. Steps are immutable once built; a
//! terminal rollup produces a new step via [`SummarizationStep::with_rollup`].
//!
//! A [`Trace`] is the ordered list of steps from level 1 down to the deepest
//! level executed. It is assembled bottom-up: each level prepends its own
//! step to the trace returned by the level below it.

use crate::core::Piece;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Separator placed between piece summaries when merging a level.
pub const SUMMARY_SEPARATOR: &str = " ";

/// Record of one recursion level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationStep {
    level: usize,
    pieces: Vec<Piece>,
    summaries: Vec<String>,
    final_summary: String,
    rolled_up: bool,
}

impl SummarizationStep {
    /// Builds a step from a level's pieces and their summaries.
    ///
    /// The final summary is the summaries joined by a single space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `summaries` and `pieces` differ in
    /// length, or if `level` is zero.
    pub fn new(level: usize, pieces: Vec<Piece>, summaries: Vec<String>) -> Result<Self> {
        if level == 0 {
            return Err(Error::InvalidState {
                message: "levels are numbered from 1".to_string(),
            });
        }
        if pieces.len() != summaries.len() {
            return Err(Error::InvalidState {
                message: format!(
                    "level {level} has {} pieces but {} summaries",
                    pieces.len(),
                    summaries.len()
                ),
            });
        }
        let final_summary = summaries.join(SUMMARY_SEPARATOR);
        Ok(Self {
            level,
            pieces,
            summaries,
            final_summary,
            rolled_up: false,
        })
    }

    /// Builds the record for an empty input: no pieces, empty summary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `level` is zero.
    pub fn empty(level: usize) -> Result<Self> {
        Self::new(level, Vec::new(), Vec::new())
    }

    /// Returns a copy of this step whose final summary is the rollup text.
    #[must_use]
    pub fn with_rollup(self, summary: String) -> Self {
        Self {
            final_summary: summary,
            rolled_up: true,
            ..self
        }
    }

    /// Recursion level (1 = outermost).
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Pieces produced at this level, left to right.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// One summary per piece, same order as [`Self::pieces`].
    #[must_use]
    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }

    /// Iterates over `(piece, summary)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&Piece, &str)> {
        self.pieces
            .iter()
            .zip(self.summaries.iter().map(String::as_str))
    }

    /// Merged (or rolled-up) summary for this level.
    #[must_use]
    pub fn final_summary(&self) -> &str {
        &self.final_summary
    }

    /// Whether [`Self::final_summary`] came from a rollup call.
    #[must_use]
    pub const fn rolled_up(&self) -> bool {
        self.rolled_up
    }

    /// Number of pieces at this level.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

/// Ordered record of every level executed for one reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<SummarizationStep>,
}

impl Trace {
    /// A trace holding only a terminal step.
    #[must_use]
    pub fn single(step: SummarizationStep) -> Self {
        Self { steps: vec![step] }
    }

    /// Prepends a shallower step to the trace of the deeper levels.
    #[must_use]
    pub fn with_parent(step: SummarizationStep, deeper: Self) -> Self {
        let mut steps = Vec::with_capacity(deeper.steps.len() + 1);
        steps.push(step);
        steps.extend(deeper.steps);
        Self { steps }
    }

    /// Steps from the outermost level to the deepest.
    #[must_use]
    pub fn steps(&self) -> &[SummarizationStep] {
        &self.steps
    }

    /// Number of levels executed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Whether no level was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a SummarizationStep;
    type IntoIter = std::slice::Iter<'a, SummarizationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Outcome of a reduction: the terminal step and the full trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// Step of the terminal level; its final summary is the answer.
    pub final_step: SummarizationStep,

    /// All levels, outermost first. The last entry equals `final_step`.
    pub trace: Trace,
}

impl Reduction {
    /// Wraps a terminal step into a one-level reduction.
    #[must_use]
    pub fn terminal(step: SummarizationStep) -> Self {
        Self {
            trace: Trace::single(step.clone()),
            final_step: step,
        }
    }

    /// Records a non-terminal step in front of a deeper reduction.
    #[must_use]
    pub fn nest(step: SummarizationStep, deeper: Self) -> Self {
        Self {
            final_step: deeper.final_step,
            trace: Trace::with_parent(step, deeper.trace),
        }
    }

    /// The reduced text.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.final_step.final_summary()
    }
}
