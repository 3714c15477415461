//! Core domain models for recursum.
//!
//! This module contains the data structures produced by a reduction:
//! pieces, per-level steps, and the trace. These are pure domain models
//! with no I/O dependencies.

pub mod piece;
pub mod step;

pub use piece::Piece;
pub use step::{Reduction, SUMMARY_SEPARATOR, SummarizationStep, Trace};
