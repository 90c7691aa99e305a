//! tagconf: typed INI-style configuration with override tags
//!
//! A config file is a sequence of `[section]` headers and `key=value` lines.
//! Values are typed by inspection (string, boolean, integer, double or list),
//! and `key<tag>=value` lines replace the untagged value for `key` whenever
//! `tag` is one of the caller's active overrides.
//!
//! ```no_run
//! use tagconf::Config;
//!
//! let config = Config::load("sample.ini", ["production", "ubuntu"])?;
//! if let Some(limit) = config.get("common.paid_users_size_limit") {
//!     println!("limit = {}", limit.as_integer()?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod domain;
pub mod parse;
pub mod render;
pub mod utils;

pub use config::{load_file, load_str, Config, ConfigError, LoadOptions, Section, Store};
pub use domain::{TypeMismatch, Value, ValueType};
