//! Config file loading
//!
//! Drives normalization, grammar recognition, inference and override
//! resolution over the lines of one file, strictly in file order.

use super::error::ConfigError;
use super::merge::{MergeOutcome, OverrideMerger};
use super::store::Store;
use crate::parse::{classify, infer_value, normalize_line, Line};
use crate::utils::read_text;
use std::collections::HashSet;
use std::path::Path;

/// Caller-supplied load settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    overrides: HashSet<String>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the given override tags. Empty tags are ignored.
    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let overrides =
            overrides.into_iter().map(Into::into).filter(|tag: &String| !tag.is_empty()).collect();
        Self { overrides }
    }

    pub fn overrides(&self) -> &HashSet<String> {
        &self.overrides
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.overrides.contains(tag)
    }
}

/// Read `path` into lines. Fails before any parsing if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = read_text(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    if !text.is_utf8() {
        tracing::warn!("Config file {} decoded as {}", path.display(), text.encoding);
    }
    Ok(text.content.lines().map(str::to_string).collect())
}

pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Store, ConfigError> {
    let lines = read_lines(path)?;
    tracing::debug!("Loading {} ({} lines)", path.display(), lines.len());
    load_lines(lines, options)
}

pub fn load_str(text: &str, options: &LoadOptions) -> Result<Store, ConfigError> {
    load_lines(text.lines(), options)
}

/// Build a store from raw lines. Any malformed setting or numeric overflow
/// aborts the whole load.
pub fn load_lines<I, S>(lines: I, options: &LoadOptions) -> Result<Store, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merger = OverrideMerger::new(options.overrides());
    let mut section = String::new();
    let mut written = 0usize;
    let mut shadowed = 0usize;

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_number = idx + 1;
        let normalized = normalize_line(raw.as_ref());
        if normalized.unterminated_quote {
            tracing::warn!("Line {}: unterminated quote runs to end of line", line_number);
        }

        let setting = match classify(&normalized.text, &section) {
            Ok(Line::Blank) => continue,
            Ok(Line::Section(name)) => {
                section = name.to_string();
                continue;
            }
            Ok(Line::Setting(setting)) => setting,
            Err(reason) => {
                return Err(ConfigError::MalformedSetting {
                    line_number,
                    line: normalized.text.clone(),
                    reason,
                });
            }
        };

        let value = infer_value(&setting.raw_value)
            .map_err(|err| ConfigError::from_infer(err, line_number))?;
        let outcome = merger.apply(&setting, value);
        if outcome.is_written() {
            written += 1;
        } else if outcome == MergeOutcome::ShadowedByOverride {
            shadowed += 1;
        }
        tracing::trace!("Line {}: {} {:?}", line_number, setting.qualified_key(), outcome);
    }

    let store = merger.finish();
    tracing::debug!(
        "Loaded {} settings in {} sections ({} writes, {} shadowed by overrides)",
        store.len(),
        store.section_count(),
        written,
        shadowed
    );
    Ok(store)
}
