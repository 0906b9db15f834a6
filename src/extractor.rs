use crate::docx_reader::DocxData;
use crate::error::ExtractionError;
use crate::pdf_reader::PdfData;
use crate::reader::{DocumentReader, ExtractedText, Format, SourceDocument};
use tracing::debug;

/// Convert an uploaded document into plain text with `\n` line separators.
///
/// Documents larger than `max_bytes` are rejected before any parsing.
pub fn extract(doc: &SourceDocument, max_bytes: usize) -> Result<ExtractedText, ExtractionError> {
    check_size(doc.size.max(doc.content.len()), max_bytes)?;

    let extracted = match doc.format {
        Format::Pdf => extract_from(&PdfData::open(&doc.content)?, Format::Pdf)?,
        Format::Docx => extract_from(&DocxData::open(&doc.content)?, Format::Docx)?,
        Format::Text => {
            let text = std::str::from_utf8(&doc.content)?;
            ExtractedText {
                text: normalize_line_endings(text),
                units: 1,
            }
        }
    };

    debug!(
        format = ?doc.format,
        bytes = doc.content.len(),
        units = extracted.units,
        text_bytes = extracted.text.len(),
        "extracted document text"
    );

    Ok(extracted)
}

/// Reject a document of `size` bytes when it is over `max_bytes`.
/// Callers that know the size up front check before loading the bytes.
pub fn check_size(size: usize, max_bytes: usize) -> Result<(), ExtractionError> {
    if size > max_bytes {
        return Err(ExtractionError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Extract through an already-opened reader. `units` is the number of
/// entries the reader yields for PDF, 1 otherwise.
pub fn extract_from(
    reader: &dyn DocumentReader,
    format: Format,
) -> Result<ExtractedText, ExtractionError> {
    let parts = reader.text_units()?;
    Ok(match format {
        Format::Pdf => {
            let units = parts.len();
            ExtractedText {
                text: join_pages(parts),
                units,
            }
        }
        Format::Docx | Format::Text => ExtractedText {
            text: join_paragraphs(parts),
            units: 1,
        },
    })
}

/// Pages are separated by a newline. A page without text contributes
/// nothing, not even a blank line.
fn join_pages(pages: Vec<String>) -> String {
    pages
        .iter()
        .map(|page| normalize_line_endings(page.trim_end_matches(['\r', '\n'])))
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_paragraphs(paragraphs: Vec<String>) -> String {
    paragraphs
        .iter()
        .map(|para| normalize_line_endings(para))
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
