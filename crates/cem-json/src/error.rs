//! Error types for lenient JSON parsing.

use std::fmt;
use thiserror::Error;

/// The kind of literal that was left open when the source ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    String,
    Array,
    Object,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Literal::String => "string",
            Literal::Array => "array literal",
            Literal::Object => "object literal",
        })
    }
}

/// Errors raised while evaluating a document.
///
/// Every variant is fatal for the current `eval` call. The `context` fields carry
/// the tokenizer's diagnostic window around the failure position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The tokenizer was asked to consume past the end of the source.
    #[error("unexpected end of source at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// The tokenizer was asked to look at a position outside the source.
    #[error("offset {offset} is out of bounds")]
    OutOfBounds { offset: usize },

    /// A string, array or object reached the end of the source before its closing delimiter.
    #[error("unclosed {literal} in json source ({context})")]
    UnclosedLiteral { literal: Literal, context: String },

    /// A structural rule was violated (missing `:`, absent key or value).
    #[error("{message} ({context})")]
    Malformed { message: String, context: String },

    /// A `\u`/`\x` escape could not be decoded.
    #[error("invalid escape sequence '{sequence}' ({context})")]
    InvalidEscape { sequence: String, context: String },

    /// Arrays and objects nested deeper than the parser accepts.
    #[error("json nesting exceeds {limit} levels ({context})")]
    TooDeep { limit: usize, context: String },

    /// A `0x` literal was not a valid 32-bit hexadecimal integer.
    #[error("invalid hexadecimal literal '{text}' ({context})")]
    InvalidHex { text: String, context: String },
}

/// Convenience alias used throughout cem-json.
pub type Result<T> = std::result::Result<T, JsonError>;
