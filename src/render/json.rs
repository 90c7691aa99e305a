//! JSON and JSONL rendering of a loaded store

use crate::config::Store;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Pretty-printed nested object: `{ "section": { "key": value } }`.
pub fn render_json(store: &Store) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(store)?;
    out.push('\n');
    Ok(out)
}

/// One object per entry with `key`, `section`, `type` and `value` fields.
pub fn render_jsonl(store: &Store) -> serde_json::Result<String> {
    let mut lines = Vec::with_capacity(store.len());
    for section in store.sections() {
        let Some(entries) = store.section(section) else {
            continue;
        };
        for (key, value) in entries {
            // BTreeMap keeps the field order stable.
            let mut entry: BTreeMap<&str, JsonValue> = BTreeMap::new();
            entry.insert("key", JsonValue::String(key.clone()));
            entry.insert("section", JsonValue::String(section.to_string()));
            entry.insert("type", JsonValue::String(value.value_type().name().to_string()));
            entry.insert("value", serde_json::to_value(value)?);
            lines.push(serde_json::to_string(&entry)?);
        }
    }
    if lines.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}\n", lines.join("\n")))
    }
}
