//! Output rendering (text, JSON, JSONL)

pub mod json;
pub mod text;

pub use json::{render_json, render_jsonl};
pub use text::{render_section, render_store, render_value};
