//! Line-level parsing: normalization, grammar recognition and value inference

pub mod grammar;
pub mod infer;
pub mod normalize;

pub use grammar::{classify, parse_section, parse_setting, GrammarError, Line};
pub use infer::{infer_value, InferError};
pub use normalize::{normalize_line, NormalizedLine};
