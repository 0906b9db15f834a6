use crate::error::ExtractionError;

/// MIME type reported for Word-processing documents
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PDF_MIME: &str = "application/pdf";
pub const TEXT_MIME: &str = "text/plain";

/// Declared format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdf,
    Docx,
    Text,
}

impl Format {
    /// Classify a declared MIME type. Anything that is neither PDF nor a
    /// Word-processing type is read as plain text.
    pub fn from_mime(mime: &str) -> Self {
        if mime == PDF_MIME {
            Format::Pdf
        } else if mime.contains("word") {
            Format::Docx
        } else {
            Format::Text
        }
    }
}

/// An uploaded document. Never mutated after it is built.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub content: Vec<u8>,
    pub format: Format,
    /// Size as declared by the uploader, in bytes
    pub size: usize,
}

impl SourceDocument {
    pub fn new(content: Vec<u8>, format: Format) -> Self {
        let size = content.len();
        Self {
            content,
            format,
            size,
        }
    }
}

/// Text produced by one extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Pages for PDF, 1 for everything else
    pub units: usize,
}

/// A parsed container that yields text in document order:
/// one entry per page (PDF) or per paragraph (DOCX).
pub trait DocumentReader {
    fn text_units(&self) -> Result<Vec<String>, ExtractionError>;
}
