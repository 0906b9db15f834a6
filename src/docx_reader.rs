use crate::error::ExtractionError;
use crate::reader::DocumentReader;
use docx_rust::document::{BodyContent, Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::DocxFile;
use std::io::Cursor;

pub struct DocxData {
    /// DocxFile owns the raw data; Docx borrows from it.
    /// We store the file so it lives long enough, then parse on demand.
    file: DocxFile,
}

impl DocxData {
    pub fn open(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let file = DocxFile::from_reader(Cursor::new(bytes.to_vec()))
            .map_err(|e| ExtractionError::InvalidDocx(e.to_string()))?;
        Ok(Self { file })
    }

    fn parse(&self) -> Result<docx_rust::Docx<'_>, ExtractionError> {
        self.file
            .parse()
            .map_err(|e| ExtractionError::InvalidDocx(e.to_string()))
    }
}

impl DocumentReader for DocxData {
    fn text_units(&self) -> Result<Vec<String>, ExtractionError> {
        let docx = self.parse()?;

        // Only top-level body paragraphs; table cells and content controls
        // are not paragraphs of the document body.
        let paragraphs = docx
            .document
            .body
            .content
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs)
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for pc in &para.content {
        match pc {
            ParagraphContent::Run(run) => push_run_text(&mut text, run),
            ParagraphContent::Link(link) => {
                if let Some(ref run) = link.content {
                    push_run_text(&mut text, run);
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run_text(text: &mut String, run: &Run) {
    for rc in &run.content {
        match rc {
            RunContent::Text(t) => text.push_str(&t.text),
            RunContent::Break(_) => text.push('\n'),
            RunContent::Tab(_) => text.push('\t'),
            _ => {}
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::docx_with_paragraphs;
    use super::*;

    #[test]
    fn test_open_rejects_non_zip() {
        let err = DocxData::open(b"definitely not a zip container").err().unwrap();
        assert!(matches!(err, ExtractionError::InvalidDocx(_)));
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let bytes = docx_with_paragraphs(&["INTRODUCTION", "Body text follows."]);
        let docx = DocxData::open(&bytes).unwrap();
        let paragraphs = docx.text_units().unwrap();
        assert_eq!(paragraphs, vec!["INTRODUCTION", "Body text follows."]);
    }
}
