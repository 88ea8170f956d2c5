//! The value tree.
//!
//! Every scalar stores a single canonical text, and that text alone decides what the
//! value *is*. [`Value::kind`] re-classifies it on every call (see
//! [`crate::coerce::classify`]), so the variant a scalar was built through only
//! records how it was constructed. Equality and hashing follow the same rule:
//! two scalars are equal when their canonical texts are equal.

use crate::array::Array;
use crate::coerce;
use crate::date;
use crate::object::Object;
use crate::serializer;
use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The classified type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Undefined,
    Boolean,
    Numeric,
    String,
    Date,
    Object,
    Array,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Numeric => "numeric",
            Kind::String => "string",
            Kind::Date => "date",
            Kind::Object => "object",
            Kind::Array => "array",
        })
    }
}

/// Canonical scalar text, exactly as it is serialized.
///
/// Only this crate creates it, so a `Value` built outside the crate always goes
/// through a constructor that quotes strings and validates numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Text(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of a lenient JSON document.
///
/// `Numeric`, `String` and `Date` hold [`Text`]: built strings and dates are quoted
/// and escaped, numbers are bare. Nodes produced by the parser keep their source
/// text (quotes and escapes included) and are decoded lazily by the accessors.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Undefined,
    Boolean(bool),
    Numeric(Text),
    String(Text),
    Date(Text),
    Array(Array),
    Object(Object),
}

impl Value {
    pub const NULL: Value = Value::Null;
    pub const UNDEFINED: Value = Value::Undefined;
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);

    /// A number from decimal text. Text that is not a plain decimal becomes `0`.
    pub fn numeric_from_str(text: &str) -> Self {
        if coerce::is_number(text) {
            Value::Numeric(Text::new(text))
        } else {
            Value::Numeric(Text::new("0"))
        }
    }

    /// A double-quoted string.
    pub fn string(s: &str) -> Self {
        Value::String(Text::new(serializer::to_json_string(s, '"')))
    }

    pub fn date(date: &DateTime<Utc>) -> Self {
        Value::Date(Text::new(serializer::to_json_string(
            &date::format_date(date),
            '"',
        )))
    }

    /// A date from text in any accepted layout, kept as written.
    /// Unrecognized text falls back to the current time.
    pub fn date_from_str(text: &str) -> Self {
        if date::is_date(text) {
            Value::Date(Text::new(serializer::to_json_string(text, '"')))
        } else {
            Value::now()
        }
    }

    pub fn now() -> Self {
        Value::date(&Utc::now())
    }

    /// Build a node from a bare source word.
    pub(crate) fn from_literal(text: String) -> Self {
        match text.as_str() {
            "null" => Value::Null,
            "undefined" => Value::Undefined,
            "true" => Value::TRUE,
            "false" => Value::FALSE,
            _ if coerce::is_number(&text) => Value::Numeric(Text(text)),
            _ => Value::String(Text(text)),
        }
    }

    /// The canonical text of a scalar, `None` for arrays and objects.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Null => Some("null"),
            Value::Undefined => Some("undefined"),
            Value::Boolean(true) => Some("true"),
            Value::Boolean(false) => Some("false"),
            Value::Numeric(text) | Value::String(text) | Value::Date(text) => {
                Some(text.as_str())
            }
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            scalar => coerce::classify(scalar.as_text().unwrap_or("null")),
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    pub fn is_undefined(&self) -> bool {
        self.kind() == Kind::Undefined
    }

    pub fn is_boolean(&self) -> bool {
        self.kind() == Kind::Boolean
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() == Kind::Numeric
    }

    pub fn is_date(&self) -> bool {
        self.kind() == Kind::Date
    }

    /// True for anything readable as a string: booleans, numbers, dates and strings.
    pub fn is_string(&self) -> bool {
        matches!(
            self.kind(),
            Kind::Boolean | Kind::Numeric | Kind::Date | Kind::String
        )
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// True for scalars.
    pub fn is_value(&self) -> bool {
        self.as_text().is_some()
    }

    /// The decoded string content: quotes removed, escapes resolved, hex words
    /// converted to decimal. `null` and `undefined` have no string value.
    pub fn as_string(&self) -> Option<String> {
        self.as_text().and_then(coerce::eval_string)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.as_string()?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// The value as a single character, if its string form is exactly one long.
    pub fn as_char(&self) -> Option<char> {
        let s = self.as_string()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_string()?.trim().parse().ok()
    }

    pub fn as_f32(&self) -> Option<f32> {
        self.as_f64().map(|d| d as f32)
    }

    /// Integral values are truncated toward zero and saturate at the type bounds.
    pub fn as_i64(&self) -> Option<i64> {
        let s = self.as_string()?;
        let s = s.trim();
        s.parse()
            .ok()
            .or_else(|| s.parse::<f64>().ok().map(|d| d as i64))
    }

    /// Truncated toward zero, saturating at the `i32` bounds.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_f64().map(|d| d as i32)
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        self.as_text().and_then(coerce::eval_date)
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Serialize to text. `strict` produces standard JSON keys; otherwise keys that
    /// are plain identifiers are left bare.
    pub fn to_json(&self, strict: bool) -> String {
        let mut out = String::new();
        serializer::write_value(self, strict, &mut out);
        out
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => match (self.as_text(), other.as_text()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Array(array) => {
                1u8.hash(state);
                array.hash(state);
            }
            Value::Object(object) => {
                2u8.hash(state);
                object.hash(state);
            }
            scalar => {
                0u8.hash(state);
                scalar.as_text().hash(state);
            }
        }
    }
}

/// Renders strict JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json(true))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Numeric(Text::new(value.to_string()))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Numeric(Text::new(value.to_string()))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Numeric(Text::new(coerce::canonical_f32(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Numeric(Text::new(coerce::canonical_f64(value)))
    }
}

/// A single-quoted one-character string.
impl From<char> for Value {
    fn from(value: char) -> Self {
        let mut buf = [0u8; 4];
        Value::String(Text::new(serializer::to_json_string(
            value.encode_utf8(&mut buf),
            '\'',
        )))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(&value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::date(&value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}
