use crate::error::ExtractionError;
use crate::reader::DocumentReader;
use lopdf::Document;
use tracing::warn;

pub struct PdfData {
    doc: Document,
}

impl PdfData {
    pub fn open(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let doc =
            Document::load_mem(bytes).map_err(|e| ExtractionError::InvalidPdf(e.to_string()))?;
        Ok(Self { doc })
    }
}

impl DocumentReader for PdfData {
    fn text_units(&self) -> Result<Vec<String>, ExtractionError> {
        let mut pages = Vec::new();

        // get_pages is keyed by page number, so iteration is in page order
        for (page_num, _page_id) in self.doc.get_pages() {
            let text = match self.doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    // Unreadable page content counts as a page without text
                    warn!(page = page_num, error = %e, "could not extract page text");
                    String::new()
                }
            };
            pages.push(text);
        }

        Ok(pages)
    }
}
