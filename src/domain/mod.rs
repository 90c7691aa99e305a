//! Core data types shared by the parser, the merger and the store

pub mod setting;
pub mod value;

pub use setting::{qualify, split_qualified, RawSetting, SECTION_DELIM};
pub use value::{TypeMismatch, Value, ValueType};
