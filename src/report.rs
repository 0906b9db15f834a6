use crate::keywords::KeywordEntry;
use serde::Serialize;

/// Average reading speed used for the read-time estimate
const WORDS_PER_MINUTE: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub words: usize,
    pub characters: usize,
    pub read_minutes: usize,
}

impl Statistics {
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let characters = text.chars().count();
        // Half-way values round to even: 500 words is 2 minutes
        let minutes = (words as f64 / WORDS_PER_MINUTE).round_ties_even() as usize;

        Self {
            words,
            characters,
            read_minutes: minutes.max(1),
        }
    }
}

/// Everything one pipeline run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Full extracted text, used for both preview and export
    pub text: String,
    pub units: usize,
    pub statistics: Statistics,
    pub headings: Vec<String>,
    pub keywords: Vec<KeywordEntry>,
}

pub fn assemble_report(
    text: String,
    units: usize,
    headings: Vec<String>,
    keywords: Vec<KeywordEntry>,
) -> Report {
    let statistics = Statistics::from_text(&text);
    Report {
        text,
        units,
        statistics,
        headings,
        keywords,
    }
}
