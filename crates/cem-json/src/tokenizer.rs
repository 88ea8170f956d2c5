//! Character cursor over a source document.
//!
//! The cursor only moves forward. All reads past the end fail with
//! [`JsonError::UnexpectedEnd`] (consuming) or [`JsonError::OutOfBounds`] (peeking),
//! and [`Tokenizer`]'s `Display` renders the window around the cursor for error messages.

use crate::error::{JsonError, Result};
use std::fmt;

/// Characters shown on either side of the cursor in diagnostics.
const WINDOW: usize = 16;

/// A forward-only cursor over the characters of a source string.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: Vec<char>,
    offset: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            offset: 0,
        }
    }

    /// Current cursor position, in characters.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Source length, in characters.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether `offset + delta` is a readable position.
    pub fn has(&self, delta: isize) -> bool {
        self.position(delta).is_some()
    }

    pub fn has_next(&self) -> bool {
        self.offset < self.source.len()
    }

    /// The character under the cursor.
    pub fn peek(&self) -> Result<char> {
        self.peek_at(0)
    }

    /// The character `delta` positions away from the cursor.
    pub fn peek_at(&self, delta: isize) -> Result<char> {
        self.position(delta)
            .map(|i| self.source[i])
            .ok_or(JsonError::OutOfBounds {
                offset: self.offset.saturating_add_signed(delta),
            })
    }

    /// Consume and return the character under the cursor.
    pub fn next_char(&mut self) -> Result<char> {
        match self.source.get(self.offset) {
            Some(&c) => {
                self.offset += 1;
                Ok(c)
            }
            None => Err(JsonError::UnexpectedEnd {
                offset: self.offset,
            }),
        }
    }

    /// Consume the next `len` characters as a string.
    pub fn next_string(&mut self, len: usize) -> Result<String> {
        (0..len).map(|_| self.next_char()).collect()
    }

    /// Move the cursor by `delta`. The result must stay within `0..=len`.
    pub fn skip(&mut self, delta: isize) -> Result<()> {
        match self.offset.checked_add_signed(delta) {
            Some(target) if target <= self.source.len() => {
                self.offset = target;
                Ok(())
            }
            _ => Err(JsonError::UnexpectedEnd {
                offset: self.offset,
            }),
        }
    }

    /// Consume `c` if it is the next character. Never moves the cursor otherwise.
    pub fn allow_next(&mut self, c: char) -> bool {
        if self.source.get(self.offset) == Some(&c) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Consume whitespace up to the next significant character or the end of source.
    pub fn skip_whitespace(&mut self) {
        while self
            .source
            .get(self.offset)
            .is_some_and(|c| c.is_whitespace())
        {
            self.offset += 1;
        }
    }

    /// Source text between two absolute offsets.
    pub(crate) fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    fn position(&self, delta: isize) -> Option<usize> {
        self.offset
            .checked_add_signed(delta)
            .filter(|&i| i < self.source.len())
    }
}

impl fmt::Display for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.offset.saturating_sub(WINDOW);
        let end = (self.offset + WINDOW).min(self.source.len());

        write!(f, "@{} ", self.offset)?;
        if start > 0 {
            f.write_str("[...]")?;
        }
        f.write_str(&self.slice(start, self.offset))?;
        f.write_str("><")?;
        if end > self.offset {
            f.write_str(&self.slice(self.offset, end))?;
        }
        if end < self.source.len() {
            f.write_str("[...]")?;
        }
        Ok(())
    }
}
