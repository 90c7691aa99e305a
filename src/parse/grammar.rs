//! Section and setting recognition on normalized lines.

use crate::domain::RawSetting;
use thiserror::Error;

pub const SECTION_START: char = '[';
pub const SECTION_END: char = ']';
pub const EQUALS: char = '=';
pub const OVERRIDE_START: char = '<';
pub const OVERRIDE_END: char = '>';

/// Why a normalized line is not a valid setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("missing '='")]
    MissingEquals,
    #[error("missing key before '='")]
    MissingKey,
    #[error("missing value after '='")]
    MissingValue,
    #[error("override tag needs both '<' and '>'")]
    UnbalancedOverride,
    #[error("override tag must follow a key")]
    OverrideWithoutKey,
    #[error("override tag must end immediately before '='")]
    MisplacedOverride,
    #[error("override tag may only contain letters, digits, '-' and '_'")]
    InvalidOverrideChar,
}

/// Classification of a normalized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Section(&'a str),
    Setting(RawSetting),
}

/// Characters allowed in section names and override tags.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Return the section name if `line` is a `[name]` header.
///
/// The name must be non-empty, so `[]` is not a section.
pub fn parse_section(line: &str) -> Option<&str> {
    if line.len() < 3 {
        return None;
    }
    let name = line.strip_prefix(SECTION_START)?.strip_suffix(SECTION_END)?;
    if name.chars().all(is_name_char) {
        Some(name)
    } else {
        None
    }
}

pub fn is_section(line: &str) -> bool {
    parse_section(line).is_some()
}

/// Decompose `key[<tag>]=value` into a [`RawSetting`] inheriting `section`.
///
/// The key and value are otherwise unrestricted; the value is returned as
/// written, quotes and commas included.
pub fn parse_setting(line: &str, section: &str) -> Result<RawSetting, GrammarError> {
    let pos = line.find(EQUALS).ok_or(GrammarError::MissingEquals)?;
    if pos == 0 {
        return Err(GrammarError::MissingKey);
    }
    if pos == line.len() - 1 {
        return Err(GrammarError::MissingValue);
    }

    let left = &line[..pos];
    let (key, override_tag) = match (left.find(OVERRIDE_START), left.find(OVERRIDE_END)) {
        (None, None) => (left, ""),
        (Some(open), Some(close)) => {
            if open == 0 {
                return Err(GrammarError::OverrideWithoutKey);
            }
            if close != left.len() - 1 {
                return Err(GrammarError::MisplacedOverride);
            }
            let tag = &left[open + 1..close];
            if !tag.chars().all(is_name_char) {
                return Err(GrammarError::InvalidOverrideChar);
            }
            (&left[..open], tag)
        }
        _ => return Err(GrammarError::UnbalancedOverride),
    };

    Ok(RawSetting {
        section: section.to_string(),
        key: key.to_string(),
        override_tag: override_tag.to_string(),
        raw_value: line[pos + 1..].to_string(),
    })
}

/// Classify one normalized line. Section headers take precedence over settings.
pub fn classify<'a>(line: &'a str, section: &str) -> Result<Line<'a>, GrammarError> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if let Some(name) = parse_section(line) {
        return Ok(Line::Section(name));
    }
    parse_setting(line, section).map(Line::Setting)
}
