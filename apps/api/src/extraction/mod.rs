//! Text Extraction — turns an uploaded resume (PDF or DOCX) into linear text.
//!
//! Each `DocumentFormat` variant owns its decode routine. Decoding never touches
//! the filesystem or network; it only reads the caller's buffer.
//!
//! Error kinds are terminal for the request:
//! - `UnsupportedFormat`: the declared format is not pdf/docx (no decode attempted)
//! - `FailedToExtractText`: the buffer could not be decoded as the declared format
//! - `EmptyDocument`: decoding succeeded but produced only whitespace

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod docx;
pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format} file: {reason}")]
    FailedToExtractText {
        format: DocumentFormat,
        reason: String,
    },

    #[error("Extracted text is empty")]
    EmptyDocument,
}

impl ExtractionError {
    pub(crate) fn decode(format: DocumentFormat, reason: impl ToString) -> Self {
        ExtractionError::FailedToExtractText {
            format,
            reason: reason.to_string(),
        }
    }
}

/// The two resume formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("pdf"),
            DocumentFormat::Docx => f.write_str("docx"),
        }
    }
}

impl DocumentFormat {
    /// Resolves a declared format tag (a MIME type or a bare `pdf`/`docx`).
    ///
    /// Any tag mentioning `pdf` is a PDF; any tag mentioning `docx` or `word`
    /// is a DOCX, which covers the long OOXML MIME type.
    pub fn from_declared(tag: &str) -> Result<Self, ExtractionError> {
        let lowered = tag.trim().to_lowercase();
        if lowered.contains("pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lowered.contains("docx") || lowered.contains("word") {
            Ok(DocumentFormat::Docx)
        } else {
            Err(ExtractionError::UnsupportedFormat(tag.to_string()))
        }
    }

    /// Resolves a format from a file name extension (`resume.PDF`, `cv.docx`).
    pub fn from_file_name(name: &str) -> Result<Self, ExtractionError> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractionError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Decodes `bytes` as this format and returns the document's raw text.
    /// Emptiness is not checked here; see [`extract_text`].
    pub fn decode(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        match self {
            DocumentFormat::Pdf => pdf::extract(bytes),
            DocumentFormat::Docx => docx::extract(bytes),
        }
    }
}

/// A resume upload: bytes plus the format they claim to be.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }
}

/// Extracts the text of an already-resolved document.
pub fn extract_document(document: &RawDocument) -> Result<String, ExtractionError> {
    let text = document.format.decode(&document.bytes)?;
    ensure_not_blank(text)
}

/// Runs [`extract_document`] on the blocking pool. A decoder panic is reported
/// as `FailedToExtractText` for that format.
pub async fn extract_document_blocking(document: RawDocument) -> Result<String, ExtractionError> {
    let format = document.format;
    tokio::task::spawn_blocking(move || extract_document(&document))
        .await
        .map_err(|e| ExtractionError::decode(format, format!("decoder aborted: {e}")))?
}

fn ensure_not_blank(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }
    debug!("Extracted {} characters", text.len());
    Ok(text)
}
