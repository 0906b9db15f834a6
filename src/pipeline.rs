use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extractor;
use crate::headings::detect_headings;
use crate::keywords::rank_keywords;
use crate::normalize::normalize;
use crate::reader::SourceDocument;
use crate::report::{assemble_report, Report};
use tracing::debug;

/// Observable outcome of handing a document (or nothing) to the pipeline
#[derive(Debug)]
pub enum PipelineState {
    /// No document supplied
    Empty,
    Failed(PipelineError),
    Ready(Report),
}

/// Run the pipeline once for an optional upload
pub fn run(doc: Option<&SourceDocument>, config: &PipelineConfig) -> PipelineState {
    match doc {
        None => PipelineState::Empty,
        Some(doc) => match process(doc, config) {
            Ok(report) => PipelineState::Ready(report),
            Err(e) => PipelineState::Failed(e),
        },
    }
}

/// Extract, analyse and assemble. Either the whole report is produced or
/// an error is returned; nothing partial.
pub fn process(doc: &SourceDocument, config: &PipelineConfig) -> Result<Report, PipelineError> {
    let extracted = extractor::extract(doc, config.max_document_bytes)?;
    if extracted.text.trim().is_empty() {
        return Err(PipelineError::EmptyContent);
    }

    let headings = detect_headings(&extracted.text, &config.heading_rules());

    let tokens = normalize(&extracted.text);
    let keywords = rank_keywords(
        &tokens,
        &config.stopwords(),
        config.min_keyword_len,
        config.keyword_limit,
    );

    debug!(
        tokens = tokens.len(),
        headings = headings.len(),
        keywords = keywords.len(),
        "analysed text"
    );

    Ok(assemble_report(
        extracted.text,
        extracted.units,
        headings,
        keywords,
    ))
}
