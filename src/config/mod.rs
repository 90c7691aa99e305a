//! Configuration loading and override resolution
//!
//! Loads an INI-style file into a typed [`Store`]. Settings tagged
//! `key<tag>=value` apply only when `tag` is an active override, and then
//! take precedence over untagged settings for the same key.

pub mod error;
pub mod handle;
pub mod loader;
pub mod merge;
pub mod store;

pub use error::ConfigError;
pub use handle::Config;
pub use loader::{load_file, load_lines, load_str, read_lines, LoadOptions};
pub use merge::{MergeOutcome, OverrideMerger};
pub use store::{Section, Store};
