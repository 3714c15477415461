//! Error types for recursum operations.
//!
//! This module provides the error hierarchy using `thiserror` for
//! splitting, generation-service calls, document I/O, and CLI commands.

use thiserror::Error;

/// Result type alias for recursum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Splitting-related errors (piece sizing and overlap).
    #[error("splitting error: {0}")]
    Splitting(#[from] SplitError),

    /// Generation-service errors.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// I/O errors (file operations, document ingestion).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Invalid state errors.
    #[error("invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state.
        message: String,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Splitting-specific errors.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Invalid split configuration.
    #[error("invalid split configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Overlap leaves no forward stride.
    #[error("overlap {percent}% must be less than 100%")]
    OverlapTooLarge {
        /// Requested overlap percentage.
        percent: u8,
    },

    /// Target piece length of zero.
    #[error("target piece length must be > 0")]
    InvalidTarget,
}

/// Errors returned by a generation backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned status {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// The response could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Backend-specific failure (runtime setup, unsupported request).
    #[error("backend error: {0}")]
    Backend(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// The document is neither PDF nor plain text.
    #[error("unsupported file format: {path}. Please upload a PDF or TXT file.")]
    UnsupportedFormat {
        /// Path to the rejected document.
        path: String,
    },

    /// PDF text extraction failed.
    #[error("failed to extract text from PDF: {path}: {reason}")]
    PdfExtraction {
        /// Path to the PDF.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                code: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}
