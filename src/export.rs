use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// At most `max_chars` characters from the start of `text`
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Write the full extracted text, unchanged, to `path`
pub fn write_export(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, text)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    Ok(())
}
