use std::str::Utf8Error;
use thiserror::Error;

/// Failures while turning an uploaded byte stream into text
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("not a readable PDF: {0}")]
    InvalidPdf(String),

    #[error("not a readable DOCX: {0}")]
    InvalidDocx(String),

    #[error("text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

/// Why a pipeline run ended without a report
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("extracted text is blank")]
    EmptyContent,
}

impl PipelineError {
    /// The message shown to the user. Both failure kinds read the same;
    /// `Display` keeps the detailed reason for logs.
    pub fn user_message(&self) -> &'static str {
        "No readable text detected."
    }
}
