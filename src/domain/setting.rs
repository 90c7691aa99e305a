//! Raw settings as produced by the grammar recognizer

/// Separator between section name and key in a fully-qualified key.
pub const SECTION_DELIM: char = '.';

/// One decomposed `key<tag>=value` line, before inference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSetting {
    pub section: String,
    pub key: String,
    /// Empty when the line carries no `<tag>` block (or an empty one).
    pub override_tag: String,
    pub raw_value: String,
}

impl RawSetting {
    pub fn qualified_key(&self) -> String {
        qualify(&self.section, &self.key)
    }

    pub fn is_tagged(&self) -> bool {
        !self.override_tag.is_empty()
    }
}

/// Build `section.key`.
pub fn qualify(section: &str, key: &str) -> String {
    let mut out = String::with_capacity(section.len() + key.len() + 1);
    out.push_str(section);
    out.push(SECTION_DELIM);
    out.push_str(key);
    out
}

/// Split a fully-qualified key back into `(section, key)`.
///
/// Section names never contain the delimiter, so the first one is the split
/// point even when the key itself contains dots.
pub fn split_qualified(qualified: &str) -> Option<(&str, &str)> {
    qualified.split_once(SECTION_DELIM)
}
