//! Text rendering of value trees.
//!
//! Scalars render their canonical text verbatim; arrays and objects are written
//! recursively into a shared buffer. In strict mode every object key is a
//! double-quoted string. In loose mode keys that are safe JavaScript identifiers are
//! emitted bare and everything else is single-quoted.

use crate::array::Array;
use crate::object::Object;
use crate::value::Value;

/// Words that may never appear as bare object keys.
pub const KEYWORDS: [&str; 27] = [
    "class",
    "if",
    "else",
    "do",
    "while",
    "for",
    "in",
    "with",
    "break",
    "continue",
    "return",
    "try",
    "catch",
    "finally",
    "throw",
    "function",
    "typeof",
    "delete",
    "new",
    "prototype",
    "null",
    "undefined",
    "true",
    "false",
    "switch",
    "case",
    "default",
];

/// Append the text form of `value` to `out`.
pub fn write_value(value: &Value, strict: bool, out: &mut String) {
    match value {
        Value::Array(array) => write_array(array, strict, out),
        Value::Object(object) => write_object(object, strict, out),
        scalar => out.push_str(scalar.as_text().unwrap_or("null")),
    }
}

pub(crate) fn write_array(array: &Array, strict: bool, out: &mut String) {
    out.push('[');
    for (i, item) in array.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_value(item, strict, out);
    }
    out.push(']');
}

pub(crate) fn write_object(object: &Object, strict: bool, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_key(key, strict, out);
        out.push(':');
        write_value(value, strict, out);
    }
    out.push('}');
}

fn write_key(key: &str, strict: bool, out: &mut String) {
    if strict {
        write_quoted(key, '"', out);
    } else if is_identifier(key) {
        out.push_str(key);
    } else {
        write_quoted(key, '\'', out);
    }
}

/// Quote and escape `s` with the given quote character.
pub fn to_json_string(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_quoted(s, quote, &mut out);
    out
}

/// Escaping rules:
/// - backslash, the active quote and `\b \f \n \r \t` get backslash escapes
/// - `/` is escaped only directly after `<`
/// - control characters, `0x80..0xA0` and `0x2000..0x2100` become `\uXXXX`
fn write_quoted(s: &str, quote: char, out: &mut String) {
    let mut prev = '\0';
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' | '\'' => {
                if c == quote {
                    out.push('\\');
                }
                out.push(c);
            }
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' => {
                if prev == '<' {
                    out.push('\\');
                }
                out.push(c);
            }
            c if needs_unicode_escape(c) => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
        prev = c;
    }
    out.push(quote);
}

fn needs_unicode_escape(c: char) -> bool {
    c < ' ' || ('\u{80}'..'\u{a0}').contains(&c) || ('\u{2000}'..'\u{2100}').contains(&c)
}

/// Whether `key` can be written as a bare identifier in loose mode.
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    !is_keyword(key) && chars.all(|c| c.is_alphanumeric() || c == '_')
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
