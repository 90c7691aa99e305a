//! Command-line interface for tagconf
//!
//! Provides `get`, `section`, `dump`, `check` and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod completions;
mod dump;
mod get;
mod section;
mod utils;

/// Load INI-style config files into typed settings with override tags
#[derive(Parser)]
#[command(name = "tagconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one setting by its fully-qualified key (section.key)
    Get(get::GetArgs),

    /// Print every setting in a section
    Section(section::SectionArgs),

    /// Print every loaded setting
    Dump(dump::DumpArgs),

    /// Validate a config file without printing settings
    Check(check::CheckArgs),

    /// Generate a shell completion script
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Get(args) => get::run(args),
        Commands::Section(args) => section::run(args),
        Commands::Dump(args) => dump::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Completions(args) => completions::run(args),
    }
}
