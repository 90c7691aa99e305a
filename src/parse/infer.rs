//! Value type inference.
//!
//! Rules are tried in a fixed order and the first one that claims the text
//! decides the type:
//! 1. empty text is an empty string
//! 2. a leading `"` makes a quoted string
//! 3. `-?digits[.digits]` is an integer or a double
//! 4. `yes`/`no`/`true`/`false` is a boolean
//! 5. two or more non-empty comma-separated tokens make a list
//! 6. anything else is the raw text as a string
//!
//! Unquoted `0` and `1` are integers, never booleans.

use super::normalize::QUOTE;
use crate::domain::Value;
use thiserror::Error;

pub const DECIMAL: char = '.';
pub const SIGN: char = '-';
pub const LIST_DELIM: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    #[error("integer {0} is larger than the supported max (64-bit signed)")]
    IntegerOverflow(String),
    #[error("floating point value {0} is larger than the supported max")]
    DoubleOverflow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberKind {
    Integer,
    Double,
}

pub fn infer_value(raw: &str) -> Result<Value, InferError> {
    if raw.is_empty() {
        return Ok(Value::String(String::new()));
    }

    if let Some(rest) = raw.strip_prefix(QUOTE) {
        let inner = rest.strip_suffix(QUOTE).unwrap_or(rest);
        return Ok(Value::String(inner.to_string()));
    }

    match number_kind(raw) {
        Some(NumberKind::Integer) => {
            return raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| InferError::IntegerOverflow(raw.to_string()));
        }
        Some(NumberKind::Double) => {
            return match raw.parse::<f64>() {
                Ok(d) if d.is_finite() => Ok(Value::Double(d)),
                _ => Err(InferError::DoubleOverflow(raw.to_string())),
            };
        }
        None => {}
    }

    if let Some(b) = parse_bool(raw) {
        return Ok(Value::Boolean(b));
    }

    let items: Vec<String> =
        raw.split(LIST_DELIM).filter(|token| !token.is_empty()).map(str::to_string).collect();
    if items.len() > 1 {
        return Ok(Value::List(items));
    }

    Ok(Value::String(raw.to_string()))
}

/// Lexical check only: an optional leading sign, at least one digit, at most one dot.
fn number_kind(raw: &str) -> Option<NumberKind> {
    let body = raw.strip_prefix(SIGN).unwrap_or(raw);
    let mut seen_digit = false;
    let mut seen_decimal = false;

    for c in body.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            DECIMAL if !seen_decimal => seen_decimal = true,
            _ => return None,
        }
    }

    if !seen_digit {
        return None;
    }
    Some(if seen_decimal { NumberKind::Double } else { NumberKind::Integer })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(raw: &str) -> Value {
        infer_value(raw).expect("inference should succeed")
    }

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn infers_integers() {
        assert_eq!(infer("26214400"), Value::Integer(26_214_400));
        assert_eq!(infer("2147483648"), Value::Integer(2_147_483_648));
        assert_eq!(infer("-2147483648"), Value::Integer(-2_147_483_648));
        assert_eq!(infer("007"), Value::Integer(7));
    }

    #[test]
    fn integer_text_round_trips_at_the_bounds() {
        for n in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
            assert_eq!(infer(&n.to_string()), Value::Integer(n));
        }
    }

    #[test]
    fn zero_and_one_are_integers_not_booleans() {
        assert_eq!(infer("0"), Value::Integer(0));
        assert_eq!(infer("1"), Value::Integer(1));
        assert_eq!(infer("\"1\""), Value::String("1".into()));
    }

    #[test]
    fn integer_overflow_is_its_own_error() {
        let raw = "99999999999999999999999999999999999999999999999999";
        assert_eq!(infer_value(raw), Err(InferError::IntegerOverflow(raw.to_string())));
        assert!(matches!(infer_value("9223372036854775808"), Err(InferError::IntegerOverflow(_))));
    }

    #[test]
    fn infers_doubles() {
        assert_eq!(infer("2.75"), Value::Double(2.75));
        assert_eq!(infer("-2.75"), Value::Double(-2.75));
        assert_eq!(infer("0.0"), Value::Double(0.0));
        assert_eq!(infer("5."), Value::Double(5.0));
        assert_eq!(infer(".5"), Value::Double(0.5));
    }

    #[test]
    fn double_overflow_is_its_own_error() {
        let raw = format!("1{}.0", "0".repeat(400));
        assert_eq!(infer_value(&raw), Err(InferError::DoubleOverflow(raw.clone())));
    }

    #[test]
    fn non_numbers_fall_through() {
        assert_eq!(infer("1.2.3"), Value::String("1.2.3".into()));
        assert_eq!(infer("-"), Value::String("-".into()));
        assert_eq!(infer("."), Value::String(".".into()));
        assert_eq!(infer("--1"), Value::String("--1".into()));
        assert_eq!(infer("+1"), Value::String("+1".into()));
        assert_eq!(infer("1,2"), list(&["1", "2"]));
    }

    #[test]
    fn infers_booleans_case_sensitively() {
        assert_eq!(infer("true"), Value::Boolean(true));
        assert_eq!(infer("false"), Value::Boolean(false));
        assert_eq!(infer("yes"), Value::Boolean(true));
        assert_eq!(infer("no"), Value::Boolean(false));
        assert_eq!(infer("True"), Value::String("True".into()));
        assert_eq!(infer("NO"), Value::String("NO".into()));
    }

    #[test]
    fn infers_lists() {
        assert_eq!(infer("array,of,values"), list(&["array", "of", "values"]));
        assert_eq!(infer("a,,b"), list(&["a", "b"]));
        assert_eq!(infer("b,a,b"), list(&["b", "a", "b"]));
    }

    #[test]
    fn single_token_keeps_raw_text() {
        assert_eq!(infer("a,"), Value::String("a,".into()));
        assert_eq!(infer(",,a,,"), Value::String(",,a,,".into()));
        assert_eq!(infer(","), Value::String(",".into()));
    }

    #[test]
    fn quoted_values_are_strings_verbatim() {
        assert_eq!(
            infer("\"hello there, ftp uploading\""),
            Value::String("hello there, ftp uploading".into())
        );
        assert_eq!(infer("\"1,2\""), Value::String("1,2".into()));
        assert_eq!(infer("\"yes\""), Value::String("yes".into()));
        assert_eq!(infer("\"\""), Value::String(String::new()));
    }

    #[test]
    fn unterminated_quote_strips_only_the_opening_quote() {
        assert_eq!(infer("\"abc"), Value::String("abc".into()));
        assert_eq!(infer("\""), Value::String(String::new()));
    }

    #[test]
    fn plain_strings_and_empty_text() {
        assert_eq!(infer("/srv/var/tmp/"), Value::String("/srv/var/tmp/".into()));
        assert_eq!(infer(""), Value::String(String::new()));
    }
}
