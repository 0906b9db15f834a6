use crate::headings::HeadingRules;
use crate::stopwords::StopwordSet;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Limits and word lists for one pipeline run.
///
/// Loaded from an optional TOML file; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub heading_limit: usize,
    pub heading_max_len: usize,
    pub headings_require_letter: bool,
    pub keyword_limit: usize,
    pub min_keyword_len: usize,
    pub preview_chars: usize,
    pub max_document_bytes: usize,
    pub export_file_name: String,
    pub extra_stopwords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            heading_limit: 20,
            heading_max_len: 60,
            headings_require_letter: false,
            keyword_limit: 20,
            min_keyword_len: 5,
            preview_chars: 3000,
            max_document_bytes: 25 * 1024 * 1024,
            export_file_name: "extracted_text.txt".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.preview_chars == 0 {
            bail!("preview_chars must be greater than zero");
        }
        if self.heading_max_len == 0 {
            bail!("heading_max_len must be greater than zero");
        }
        if self.max_document_bytes == 0 {
            bail!("max_document_bytes must be greater than zero");
        }
        if self.export_file_name.trim().is_empty() {
            bail!("export_file_name must not be empty");
        }
        Ok(())
    }

    pub fn heading_rules(&self) -> HeadingRules {
        HeadingRules {
            max_len: self.heading_max_len,
            limit: self.heading_limit,
            require_letter: self.headings_require_letter,
        }
    }

    pub fn stopwords(&self) -> StopwordSet {
        let mut stopwords = StopwordSet::english();
        stopwords.extend(self.extra_stopwords.as_slice());
        stopwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(PipelineConfig::from_toml("").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PipelineConfig::from_toml(
            r#"
            heading_limit = 15
            preview_chars = 2500
            export_file_name = "processed_text.txt"
            extra_stopwords = ["Chapter"]
            "#,
        )
        .unwrap();
        assert_eq!(config.heading_limit, 15);
        assert_eq!(config.preview_chars, 2500);
        assert_eq!(config.keyword_limit, 20);
        assert_eq!(config.export_file_name, "processed_text.txt");
        assert!(config.stopwords().contains("chapter"));
        assert!(config.stopwords().contains("about"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(PipelineConfig::from_toml("heading_cap = 3").is_err());
    }

    #[test]
    fn test_zero_preview_rejected() {
        let err = PipelineConfig::from_toml("preview_chars = 0").unwrap_err();
        assert!(err.to_string().contains("preview_chars"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keyword_limit = 5").unwrap();
        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.keyword_limit, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PipelineConfig::load(Path::new("/nonexistent/doc2stats.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
