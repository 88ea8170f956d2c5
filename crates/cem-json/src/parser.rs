//! Recursive-descent reader for lenient JSON.
//!
//! Accepts JavaScript object-literal syntax on top of JSON:
//!
//! - Single- or double-quoted strings, with `\b \t \n \r \f \uXXXX \xXX` escapes
//!   (any other escaped character stands for itself)
//! - Bare words made of letters, digits, `_`, `-` and `.` (`null`, `undefined`, `true`,
//!   numbers, identifiers); `0x` words are hexadecimal integers
//! - Unquoted object keys, optional commas, and empty array slots (`[1,,3]`)
//!
//! # Two string readers
//!
//! Values keep their raw source text: `'a\tb'` is stored as written (quotes and
//! escapes included) and decoded lazily by the accessors. Object keys and
//! accessor reads go through [`read_string`], which resolves quotes and
//! escapes immediately. Escapes in raw values are still checked during the
//! parse, so a malformed escape fails the whole document either way.
//!
//! Content after the first complete value is ignored. Arrays and objects may nest
//! at most [`MAX_DEPTH`] levels deep.

use crate::array::Array;
use crate::error::{JsonError, Literal, Result};
use crate::object::Object;
use crate::tokenizer::Tokenizer;
use crate::value::{Text, Value};
use std::str::FromStr;
use tracing::{debug, trace};

/// Deepest array/object nesting accepted before [`JsonError::TooDeep`].
pub const MAX_DEPTH: usize = 512;

/// Parse a document. Empty input, or input that does not start with a value, is `null`.
pub fn eval(source: &str) -> Result<Value> {
    let mut tok = Tokenizer::new(source.trim());
    trace!(len = tok.len(), "evaluating json source");
    let value = visit_json(&mut tok, 0)
        .inspect_err(|e| debug!(error = %e, "json evaluation failed"))?;
    Ok(value.unwrap_or(Value::NULL))
}

/// Parse a document that must be an array. `None` if it does not start with `[`.
pub fn eval_array(source: &str) -> Result<Option<Array>> {
    visit_array(&mut Tokenizer::new(source.trim()), 0)
        .inspect_err(|e| debug!(error = %e, "json array evaluation failed"))
}

/// Parse a document that must be an object. `None` if it does not start with `{`.
pub fn eval_object(source: &str) -> Result<Option<Object>> {
    visit_object(&mut Tokenizer::new(source.trim()), 0)
        .inspect_err(|e| debug!(error = %e, "json object evaluation failed"))
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        eval(s)
    }
}

/// Read one value at the cursor, or `None` if no value starts here.
///
/// `depth` counts the arrays and objects enclosing the cursor.
fn visit_json(tok: &mut Tokenizer, depth: usize) -> Result<Option<Value>> {
    let Ok(c) = tok.peek() else {
        return Ok(None);
    };

    if is_word_char(c) {
        let word = read_word(tok);
        if let Some(digits) = word.strip_prefix("0x") {
            return parse_hex(digits, tok).map(|n| Some(Value::from(n)));
        }
        return Ok(Some(Value::from_literal(word)));
    }

    match c {
        '\'' | '"' => {
            let start = tok.offset();
            read_quoted(tok)?;
            Ok(Some(Value::String(Text::new(tok.slice(start, tok.offset())))))
        }
        '[' => Ok(visit_array(tok, depth)?.map(Value::Array)),
        '{' => Ok(visit_object(tok, depth)?.map(Value::Object)),
        _ => Ok(None),
    }
}

/// `[` ( whitespace | `,` | value )* `]`
///
/// A comma that closes a slot with no value in it inserts a `null` placeholder, so
/// `[1,,3]` has three elements. A trailing comma after a value adds nothing.
fn visit_array(tok: &mut Tokenizer, depth: usize) -> Result<Option<Array>> {
    if !tok.allow_next('[') {
        return Ok(None);
    }
    check_depth(depth, tok)?;

    let mut items = Array::new();
    let mut slot_filled = false;

    loop {
        tok.skip_whitespace();
        if !tok.has_next() {
            break;
        }
        if tok.allow_next(']') {
            return Ok(Some(items));
        }
        if tok.allow_next(',') {
            if !slot_filled {
                items.add_null();
            }
            slot_filled = false;
            continue;
        }

        let value = visit_json(tok, depth + 1)?
            .ok_or_else(|| malformed("null array item value", tok))?;
        items.add(value);
        slot_filled = true;
    }

    Err(unclosed(Literal::Array, tok))
}

/// `{` ( whitespace | `,` | key `:` value )* `}`
///
/// Keys are decoded with [`read_string`]. A repeated key replaces the earlier value.
fn visit_object(tok: &mut Tokenizer, depth: usize) -> Result<Option<Object>> {
    if !tok.allow_next('{') {
        return Ok(None);
    }
    check_depth(depth, tok)?;

    let mut items = Object::new();

    loop {
        tok.skip_whitespace();
        if !tok.has_next() {
            break;
        }
        if tok.allow_next('}') {
            return Ok(Some(items));
        }
        if tok.allow_next(',') {
            continue;
        }

        let key = read_string(tok)?.ok_or_else(|| malformed("null object property name", tok))?;

        tok.skip_whitespace();
        if !tok.allow_next(':') {
            return Err(malformed("object property must be followed by ':'", tok));
        }
        tok.skip_whitespace();

        let value = visit_json(tok, depth + 1)?
            .ok_or_else(|| malformed("null object property value", tok))?;
        items.set(key, value);
    }

    Err(unclosed(Literal::Object, tok))
}

/// Read the string content at the cursor.
///
/// Quoted strings are unquoted and unescaped. Bare words are returned as written,
/// except that `null` and `undefined` have no content and `0x` words become
/// decimal text. Anything else yields `None`.
pub(crate) fn read_string(tok: &mut Tokenizer) -> Result<Option<String>> {
    let Ok(c) = tok.peek() else {
        return Ok(None);
    };

    if c == '\'' || c == '"' {
        return read_quoted(tok).map(Some);
    }
    if !is_word_char(c) {
        return Ok(None);
    }

    let word = read_word(tok);
    if word == "null" || word == "undefined" {
        return Ok(None);
    }
    if let Some(digits) = word.strip_prefix("0x") {
        return parse_hex(digits, tok).map(|n| Some(n.to_string()));
    }
    Ok(Some(word))
}

/// Consume a quoted string and return its decoded content.
fn read_quoted(tok: &mut Tokenizer) -> Result<String> {
    let quote = tok.next_char()?;
    let mut buffer = String::new();

    while tok.has_next() {
        match tok.next_char()? {
            '\n' | '\r' => break,
            '\\' => buffer.push(read_escape(tok)?),
            c if c == quote => return Ok(buffer),
            c => buffer.push(c),
        }
    }

    Err(unclosed(Literal::String, tok))
}

/// Decode the escape following a backslash.
fn read_escape(tok: &mut Tokenizer) -> Result<char> {
    let c = match tok.next_char()? {
        'b' => '\u{8}',
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\u{c}',
        'x' => {
            let code = read_hex_escape(tok, 'x', 2)?;
            return to_char(code, tok, || format!("\\x{code:02x}"));
        }
        'u' => return read_unicode_escape(tok),
        other => other,
    };
    Ok(c)
}

/// `\uXXXX`, combining a UTF-16 surrogate pair written as two escapes.
fn read_unicode_escape(tok: &mut Tokenizer) -> Result<char> {
    let high = read_hex_escape(tok, 'u', 4)?;
    if !(0xD800..0xDC00).contains(&high) {
        return to_char(high, tok, || format!("\\u{high:04x}"));
    }

    if matches!(tok.peek(), Ok('\\')) && matches!(tok.peek_at(1), Ok('u')) {
        tok.skip(2)?;
        let low = read_hex_escape(tok, 'u', 4)?;
        if (0xDC00..0xE000).contains(&low) {
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return to_char(code, tok, || format!("\\u{high:04x}\\u{low:04x}"));
        }
        return Err(invalid_escape(format!("\\u{high:04x}\\u{low:04x}"), tok));
    }

    Err(invalid_escape(format!("\\u{high:04x}"), tok))
}

fn read_hex_escape(tok: &mut Tokenizer, kind: char, digits: usize) -> Result<u32> {
    let text = tok.next_string(digits)?;
    u32::from_str_radix(&text, 16).map_err(|_| invalid_escape(format!("\\{kind}{text}"), tok))
}

fn to_char(code: u32, tok: &Tokenizer, sequence: impl FnOnce() -> String) -> Result<char> {
    char::from_u32(code).ok_or_else(|| invalid_escape(sequence(), tok))
}

/// Hexadecimal digits of a `0x` word, as a non-negative 32-bit integer.
fn parse_hex(digits: &str, tok: &Tokenizer) -> Result<i32> {
    let invalid = || JsonError::InvalidHex {
        text: format!("0x{digits}"),
        context: tok.to_string(),
    };
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let n = i32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    trace!(digits, value = n, "converted hexadecimal literal");
    Ok(n)
}

/// Consume a maximal run of word characters. The cursor must be on one.
fn read_word(tok: &mut Tokenizer) -> String {
    let mut word = String::new();
    while let Ok(c) = tok.peek() {
        if !is_word_char(c) {
            break;
        }
        word.push(c);
        tok.allow_next(c);
    }
    word
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn check_depth(depth: usize, tok: &Tokenizer) -> Result<()> {
    if depth < MAX_DEPTH {
        return Ok(());
    }
    Err(JsonError::TooDeep {
        limit: MAX_DEPTH,
        context: tok.to_string(),
    })
}

fn unclosed(literal: Literal, tok: &Tokenizer) -> JsonError {
    JsonError::UnclosedLiteral {
        literal,
        context: tok.to_string(),
    }
}

fn malformed(message: &str, tok: &Tokenizer) -> JsonError {
    JsonError::Malformed {
        message: message.to_string(),
        context: tok.to_string(),
    }
}

fn invalid_escape(sequence: String, tok: &Tokenizer) -> JsonError {
    JsonError::InvalidEscape {
        sequence,
        context: tok.to_string(),
    }
}
