//! Type derivation and coercion over canonical scalar text.
//!
//! Nothing here caches a type. Every question ("is this a number?", "what string
//! does this hold?") is answered by re-reading the stored text.

use crate::date;
use crate::parser;
use crate::tokenizer::Tokenizer;
use crate::value::Kind;
use chrono::{DateTime, Utc};

/// Classify scalar text.
///
/// Order matters: the keywords `null`, `undefined`, `true` and `false` win, then
/// plain decimals, then anything whose string content is a date, and everything
/// else is a string.
pub fn classify(text: &str) -> Kind {
    match text {
        "null" => Kind::Null,
        "undefined" => Kind::Undefined,
        "true" | "false" => Kind::Boolean,
        _ if is_number(text) => Kind::Numeric,
        _ if eval_date(text).is_some() => Kind::Date,
        _ => Kind::String,
    }
}

/// A plain decimal: an optional leading `-`, at most one `.`, digits otherwise.
/// Exponents are not accepted.
pub fn is_number(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut has_dot = false;
    for (i, c) in text.chars().enumerate() {
        match c {
            '.' if has_dot => return false,
            '.' => has_dot = true,
            '-' if i != 0 => return false,
            '-' => {}
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    true
}

/// Read the string content of scalar text. Malformed text has no string value.
pub fn eval_string(text: &str) -> Option<String> {
    parser::read_string(&mut Tokenizer::new(text))
        .ok()
        .flatten()
}

/// Read scalar text as a date.
pub fn eval_date(text: &str) -> Option<DateTime<Utc>> {
    eval_string(text).as_deref().and_then(date::parse_date)
}

/// Canonical text for a double: integral values drop the fraction.
pub(crate) fn canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return (value as i64).to_string();
    }
    value.to_string()
}

/// Canonical text for a float: integral values drop the fraction.
pub(crate) fn canonical_f32(value: f32) -> String {
    if !value.is_finite() {
        return non_finite(value.into());
    }
    if value.fract() == 0.0 && value.abs() < i32::MAX as f32 {
        return (value as i32).to_string();
    }
    value.to_string()
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}
