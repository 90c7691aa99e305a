//! Typed configuration values

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Boolean,
    Integer,
    Double,
    List,
}

impl ValueType {
    /// Short label used when printing values, e.g. `[INT]`.
    pub fn label(self) -> &'static str {
        match self {
            ValueType::String => "STR",
            ValueType::Boolean => "BOOL",
            ValueType::Integer => "INT",
            ValueType::Double => "DBL",
            ValueType::List => "LIST",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Double => "double",
            ValueType::List => "list",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by the typed accessors when the stored variant differs from the
/// requested one. The value itself is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("config item holds {found}, expected {expected}")]
pub struct TypeMismatch {
    pub expected: ValueType,
    pub found: ValueType,
}

/// A single configuration value as inferred from the raw text.
///
/// List elements are never empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i64),
    Double(f64),
    List(Vec<String>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Double(_) => ValueType::Double,
            Value::List(_) => ValueType::List,
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueType::String)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueType::Boolean)),
        }
    }

    pub fn as_integer(&self) -> Result<i64, TypeMismatch> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ValueType::Integer)),
        }
    }

    pub fn as_double(&self) -> Result<f64, TypeMismatch> {
        match self {
            Value::Double(d) => Ok(*d),
            other => Err(other.mismatch(ValueType::Double)),
        }
    }

    pub fn as_list(&self) -> Result<&[String], TypeMismatch> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch(ValueType::List)),
        }
    }

    fn mismatch(&self, expected: ValueType) -> TypeMismatch {
        TypeMismatch { expected, found: self.value_type() }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{}", d),
            Value::List(items) => f.write_str(&items.join(", ")),
        }
    }
}
