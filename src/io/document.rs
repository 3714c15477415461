//! Document ingestion.
//!
//! Turns an uploaded file into a single text buffer. Plain-text files must
//! be valid UTF-8; PDFs are run through `pdf-extract`. Any other extension
//! is rejected before the reducer is ever invoked.

use crate::error::{CommandError, IoError, Result};
use crate::io::reader::FileReader;
use crate::io::unicode::char_len;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// UTF-8 plain text (`.txt`).
    Text,
    /// Portable Document Format (`.pdf`).
    Pdf,
}

impl DocumentFormat {
    /// Detects the format from a path's extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
        }
    }
}

/// An ingested document.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Where the document was read from.
    pub source: PathBuf,
    /// Detected format.
    pub format: DocumentFormat,
    /// Extracted text.
    pub text: String,
}

impl Document {
    /// Text length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}

/// Loads a document and extracts its text.
///
/// # Errors
///
/// Returns an error if the path has no file name, the format is not PDF or
/// TXT, the file cannot be read, text is not UTF-8, or PDF extraction fails.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy().to_string();

    if path.file_name().is_none_or(|name| name.is_empty()) {
        return Err(CommandError::InvalidArgument("no file selected".to_string()).into());
    }

    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| IoError::UnsupportedFormat { path: path_str.clone() })?;

    let reader = FileReader::open(path)?;
    let text = match format {
        DocumentFormat::Text => reader.read_to_string()?,
        DocumentFormat::Pdf => {
            let bytes = reader.read_to_bytes()?;
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| IoError::PdfExtraction {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
        }
    };

    debug!(path = %path_str, format = format.as_str(), bytes = text.len(), "Loaded document");

    Ok(Document {
        source: path.to_path_buf(),
        format,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.txt")),
            Some(DocumentFormat::Text)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dir/Contract.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("a.docx")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_load_text_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "Première clause.").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.format, DocumentFormat::Text);
        assert_eq!(doc.text, "Première clause.");
        assert_eq!(doc.char_len(), 16);
    }

    #[test]
    fn test_unsupported_format_rejected_before_reading() {
        // The file does not exist: format check must come first.
        let result = load_document("/nonexistent/contract.docx");
        assert!(matches!(
            result,
            Err(Error::Io(IoError::UnsupportedFormat { .. }))
        ));
    }

    #[test]
    fn test_missing_text_file() {
        let result = load_document("/nonexistent/contract.txt");
        assert!(matches!(
            result,
            Err(Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = load_document("");
        assert!(matches!(
            result,
            Err(Error::Command(CommandError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_invalid_pdf_reports_extraction_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.pdf");
        std::fs::write(&path, b"not really a pdf").unwrap();

        let result = load_document(&path);
        assert!(matches!(
            result,
            Err(Error::Io(IoError::PdfExtraction { .. }))
        ));
    }
}
