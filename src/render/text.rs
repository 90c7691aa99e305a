//! Human-readable value printing
//!
//! Values print as `[TYPE]:\tvalue`; lists print as `{ a, b, c }`.

use crate::config::{Section, Store};
use crate::domain::Value;

pub const NOT_FOUND: &str = "Setting not found.";

pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => format!("[NONE]:\t{}", NOT_FOUND),
        Some(value) => format!("[{}]:\t{}", value.value_type().label(), display(value)),
    }
}

/// Every key of a section in sorted order, each followed by its value line.
pub fn render_section(section: &Section) -> String {
    let lines: Vec<String> = section
        .iter()
        .map(|(key, value)| format!("[KEY]:\t{}:\n{}", key, render_value(Some(value))))
        .collect();
    join_lines(lines)
}

/// One `section.key<TAB>[TYPE]:<TAB>value` line per entry.
pub fn render_store(store: &Store) -> String {
    let lines: Vec<String> = store
        .iter()
        .map(|(qualified, value)| format!("{}\t{}", qualified, render_value(Some(value))))
        .collect();
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn display(value: &Value) -> String {
    match value {
        Value::List(items) => format!("{{ {} }}", items.join(", ")),
        other => other.to_string(),
    }
}
