use crate::cli::Cli;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::export;
use crate::extractor;
use crate::metadata::{self, FileInfo};
use crate::pipeline::{self, PipelineState};
use crate::reader::{Format, SourceDocument, DOCX_MIME, PDF_MIME, TEXT_MIME};
use crate::report::Report;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Serialize)]
struct JsonOutput<'a> {
    file: &'a FileInfo,
    preview: &'a str,
    report: &'a Report,
}

pub fn convert(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let declared_size = fs::metadata(&cli.input)
        .with_context(|| format!("Failed to read document: {}", cli.input.display()))?
        .len();
    let declared_size = usize::try_from(declared_size).unwrap_or(usize::MAX);
    if let Err(e) = extractor::check_size(declared_size, config.max_document_bytes) {
        let e = PipelineError::from(e);
        error!(reason = %e, "document rejected before reading");
        bail!("{} ({})", e.user_message(), e);
    }

    let content = fs::read(&cli.input)
        .with_context(|| format!("Failed to read document: {}", cli.input.display()))?;
    let mime = cli
        .mime
        .clone()
        .unwrap_or_else(|| guess_mime(&cli.input).to_string());

    let mut doc = SourceDocument::new(content, Format::from_mime(&mime));
    doc.size = doc.size.max(declared_size);
    let info = FileInfo::new(&cli.input, &mime, doc.size);
    info!(file = %info.name, mime = %info.mime, size_kb = info.size_kb, "processing document");

    let report = match pipeline::run(Some(&doc), &config) {
        PipelineState::Ready(report) => report,
        PipelineState::Failed(e) => {
            error!(reason = %e, "document could not be processed");
            bail!("{} ({})", e.user_message(), e);
        }
        PipelineState::Empty => bail!("No document supplied"),
    };

    if cli.json {
        let output = JsonOutput {
            file: &info,
            preview: export::preview(&report.text, config.preview_chars),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!(
            "{}",
            metadata::format_summary(&info, &report, config.preview_chars)
        );
    }

    if !cli.no_export {
        let output_path = resolve_output_path(cli, &config);
        export::write_export(&output_path, &report.text)?;
        info!(path = %output_path.display(), "wrote extracted text");
    }

    Ok(())
}

/// Config file values, then command-line overrides
fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match cli.config {
        Some(ref path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(limit) = cli.heading_limit {
        config.heading_limit = limit;
    }
    if let Some(limit) = cli.keyword_limit {
        config.keyword_limit = limit;
    }
    if let Some(chars) = cli.preview_chars {
        config.preview_chars = chars;
    }
    if let Some(len) = cli.min_keyword_len {
        config.min_keyword_len = len;
    }
    if let Some(mb) = cli.max_size_mb {
        config.max_document_bytes = mb.saturating_mul(1024 * 1024);
    }

    config.validate()?;
    Ok(config)
}

fn resolve_output_path(cli: &Cli, config: &PipelineConfig) -> PathBuf {
    match cli.output {
        Some(ref path) => path.clone(),
        None => PathBuf::from(&config.export_file_name),
    }
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => PDF_MIME,
        "docx" | "doc" => DOCX_MIME,
        _ => TEXT_MIME,
    }
}
