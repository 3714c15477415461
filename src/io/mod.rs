//! I/O utilities for recursum.
//!
//! Document ingestion (plain text and PDF), file reading with memory
//! mapping for large inputs, stopword preprocessing, and Unicode helpers.

pub mod document;
pub mod preprocess;
pub mod reader;
pub mod unicode;

pub use document::{Document, DocumentFormat, load_document};
pub use preprocess::preprocess;
pub use reader::FileReader;
pub use unicode::{char_len, char_prefix};
