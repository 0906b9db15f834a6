use clap::Parser;
use std::path::PathBuf;

/// Extract text from PDF, DOCX or plain-text documents and report
/// statistics, headings and keywords
#[derive(Parser, Debug)]
#[command(name = "doc2stats", version, about)]
pub struct Cli {
    /// Path to the input document
    pub input: PathBuf,

    /// Declared MIME type of the document.
    /// Defaults to a type guessed from the file extension.
    #[arg(long)]
    pub mime: Option<String>,

    /// Where to write the extracted text.
    /// Defaults to the configured export file name in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write the extracted text to a file
    #[arg(long, default_value_t = false)]
    pub no_export: bool,

    /// Print the report as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// TOML file with pipeline limits and extra stopwords
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of headings to report
    #[arg(long)]
    pub heading_limit: Option<usize>,

    /// Maximum number of keywords to report
    #[arg(long)]
    pub keyword_limit: Option<usize>,

    /// Number of characters shown in the preview
    #[arg(long)]
    pub preview_chars: Option<usize>,

    /// Keywords must be longer than this many characters
    #[arg(long)]
    pub min_keyword_len: Option<usize>,

    /// Reject documents larger than this many megabytes
    #[arg(long)]
    pub max_size_mb: Option<usize>,

    /// Log debug output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
