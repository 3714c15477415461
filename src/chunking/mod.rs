//! Text splitting for recursum.
//!
//! The reducer sizes pieces per level and delegates the actual partitioning
//! to [`OverlapSplitter`], a deterministic fixed-size splitter whose
//! consecutive pieces share a percentage of their characters.

pub mod fixed;

pub use fixed::{OverlapSplitter, split};

/// Default piece size in characters.
pub const DEFAULT_MAX_CHARS: usize = 1500;

/// Overlap between consecutive pieces, as a percentage of the piece size.
pub const DEFAULT_OVERLAP_PERCENT: u8 = 10;
