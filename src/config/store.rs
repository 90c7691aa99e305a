//! The loaded key/value store
//!
//! Values live in a single section-indexed map. Lookups by fully-qualified key
//! split the key at the first `.` (section names cannot contain one), so the
//! flat and per-section views cannot disagree.

use crate::domain::{qualify, split_qualified, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// All keys of one section, by bare key.
pub type Section = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Store {
    sections: BTreeMap<String, Section>,
}

impl Store {
    /// Look up `section.key`.
    pub fn get(&self, qualified_key: &str) -> Option<&Value> {
        let (section, key) = split_qualified(qualified_key)?;
        self.get_in(section, key)
    }

    pub fn get_in(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_key(&self, qualified_key: &str) -> bool {
        self.get(qualified_key).is_some()
    }

    /// Section names in sorted order. The unnamed section is `""`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// `(fully-qualified key, value)` pairs, sorted by section then key.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> {
        self.sections.iter().flat_map(|(section, entries)| {
            entries.iter().map(move |(key, value)| (qualify(section, key), value))
        })
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Replace the value for `section.key`, returning the previous one.
    pub(crate) fn insert(&mut self, section: &str, key: &str, value: Value) -> Option<Value> {
        self.sections.entry(section.to_string()).or_default().insert(key.to_string(), value)
    }
}
