//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tagconf::Config;

/// The config file and the overrides to load it with.
#[derive(Args)]
pub struct SourceArgs {
    /// Config file to load
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Active override tags (comma-separated, e.g. 'production,ubuntu')
    #[arg(short = 'o', long = "override", value_name = "TAGS", env = "TAGCONF_OVERRIDES")]
    pub overrides: Option<String>,
}

impl SourceArgs {
    pub fn load(&self) -> Result<Config> {
        let overrides = parse_csv(&self.overrides).unwrap_or_default();
        tracing::debug!("Active overrides: {:?}", overrides);
        Config::load(&self.path, overrides)
            .with_context(|| format!("Failed to load config file: {}", self.path.display()))
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}
