use crate::export;
use crate::report::Report;
use serde::Serialize;
use std::path::Path;

/// Facts about the uploaded file shown next to the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub mime: String,
    pub size_kb: f64,
}

impl FileInfo {
    pub fn new(path: &Path, mime: &str, size: usize) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            name,
            mime: mime.to_string(),
            size_kb: (size as f64 / 1024.0 * 100.0).round() / 100.0,
        }
    }
}

/// Human-readable summary: file line, statistics, headings, keywords, preview
pub fn format_summary(info: &FileInfo, report: &Report, preview_chars: usize) -> String {
    let mut lines = Vec::new();

    lines.push("# Document Summary".to_string());
    lines.push(String::new());
    lines.push(format!(
        "File: {} | Type: {} | Size: {} KB",
        info.name, info.mime, info.size_kb
    ));
    lines.push(String::new());

    let stats = &report.statistics;
    lines.push(format!("**Pages:** {}", report.units));
    lines.push(format!("**Words:** {}", stats.words));
    lines.push(format!("**Characters:** {}", stats.characters));
    lines.push(format!("**Read Time:** {} min", stats.read_minutes));
    lines.push(String::new());

    lines.push("## Structure".to_string());
    lines.push(String::new());
    if report.headings.is_empty() {
        lines.push("No clear headings detected.".to_string());
    } else {
        for heading in &report.headings {
            lines.push(format!("- {}", heading));
        }
    }
    lines.push(String::new());

    lines.push("## Keywords".to_string());
    lines.push(String::new());
    if report.keywords.is_empty() {
        lines.push("No keywords detected.".to_string());
    } else {
        let words: Vec<&str> = report.keywords.iter().map(|k| k.token.as_str()).collect();
        lines.push(words.join(", "));
    }
    lines.push(String::new());

    lines.push("## Preview".to_string());
    lines.push(String::new());
    lines.push(export::preview(&report.text, preview_chars).to_string());

    lines.join("\n") + "\n"
}
