mod cli;
mod config;
mod converter;
mod docx_reader;
mod error;
mod export;
mod extractor;
mod headings;
mod keywords;
mod logger;
mod metadata;
mod normalize;
mod pdf_reader;
mod pipeline;
mod reader;
mod report;
mod stopwords;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logger::init_logger(if cli.verbose { "debug" } else { "info" });
    converter::convert(&cli)
}
