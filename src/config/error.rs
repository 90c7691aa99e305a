//! Load failures

use crate::parse::{GrammarError, InferError};
use std::path::PathBuf;
use thiserror::Error;

/// A failed load. No store is produced when any of these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to open config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed setting on line {line_number} ({reason}): {line}")]
    MalformedSetting { line_number: usize, line: String, reason: GrammarError },

    #[error("line {line_number}: the config file contained an integer larger than the supported max (64-bit signed): {value}")]
    IntegerOverflow { line_number: usize, value: String },

    #[error("line {line_number}: the config file contained a floating point value larger than the supported max: {value}")]
    DoubleOverflow { line_number: usize, value: String },
}

impl ConfigError {
    pub(crate) fn from_infer(err: InferError, line_number: usize) -> Self {
        match err {
            InferError::IntegerOverflow(value) => ConfigError::IntegerOverflow { line_number, value },
            InferError::DoubleOverflow(value) => ConfigError::DoubleOverflow { line_number, value },
        }
    }

    /// 1-based line that caused the failure, if the failure came from parsing.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ConfigError::Io { .. } => None,
            ConfigError::MalformedSetting { line_number, .. }
            | ConfigError::IntegerOverflow { line_number, .. }
            | ConfigError::DoubleOverflow { line_number, .. } => Some(*line_number),
        }
    }
}
