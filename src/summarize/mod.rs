//! Document reduction.
//!
//! - [`RecursiveReducer`]: recursive split, summarize, and merge with a
//!   bounded depth and a terminal rollup
//! - [`extract_clauses`]: one-shot clause enumeration, independent of the
//!   recursion

pub mod clauses;
pub mod reducer;

pub use clauses::{extract_clauses, parse_clause_lines};
pub use reducer::{
    DEFAULT_TARGET_PIECE_LENGTH, MAX_LEVEL, RecursiveReducer, normalized_piece_length,
};
