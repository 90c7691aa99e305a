//! Dump command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tagconf::render::{render_json, render_jsonl, render_store};

use super::utils::SourceArgs;

#[derive(Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "text")]
    pub format: DumpFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Text,
    Json,
    Jsonl,
}

pub fn run(args: DumpArgs) -> Result<()> {
    let config = args.source.load()?;
    let store = config.store();

    let output = match args.format {
        DumpFormat::Text => render_store(store),
        DumpFormat::Json => render_json(store).context("Failed to serialize settings as JSON")?,
        DumpFormat::Jsonl => render_jsonl(store).context("Failed to serialize settings as JSONL")?,
    };
    print!("{}", output);
    Ok(())
}
