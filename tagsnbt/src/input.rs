use crate::error::{Error, Result};
use crate::tokens::ESCAPE_MARKER;

/// A cursor over the chars of an SNBT document. Positions count chars, not
/// bytes.
pub struct CharBuffer {
    chars: Vec<char>,
    index: usize,
}

impl CharBuffer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The current char, if any remain.
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// The char `offset` places after the current one.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    /// Consume the current char.
    pub fn take(&mut self) -> Result<char> {
        let c = self.peek().ok_or_else(|| self.eof())?;
        self.index += 1;
        Ok(c)
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn has_more(&self) -> bool {
        self.has_more_at(0)
    }

    /// Whether a char exists `offset` places after the current one.
    pub fn has_more_at(&self, offset: usize) -> bool {
        self.index + offset < self.chars.len()
    }

    pub fn skip_whitespace(&mut self) -> &mut Self {
        while self.peek().map_or(false, char::is_whitespace) {
            self.advance();
        }
        self
    }

    /// Everything up to the next `until`, matched case-insensitively. The
    /// delimiter is consumed but not returned. Escaped chars never match.
    pub fn take_until(&mut self, until: char) -> Result<String> {
        let until = until.to_ascii_lowercase();
        let mut end = None;
        let mut idx = self.index;
        while idx < self.chars.len() {
            let c = self.chars[idx];
            if c == ESCAPE_MARKER {
                idx += 1;
            } else if c.to_ascii_lowercase() == until {
                end = Some(idx);
                break;
            }
            idx += 1;
        }

        match end {
            Some(end) => {
                let taken = self.chars[self.index..end].iter().collect();
                self.index = end + 1;
                Ok(taken)
            }
            None => Err(self.make_error(format!("no occurrence of {} was found", until))),
        }
    }

    /// Skip whitespace, then consume `expected` or fail.
    pub fn expect(&mut self, expected: char) -> Result<&mut Self> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.make_error(format!(
                "expected character '{}' but got end of input",
                expected
            ))),
            Some(c) if c != expected => Err(self.make_error(format!(
                "expected character '{}' but got '{}'",
                expected, c
            ))),
            Some(_) => {
                self.advance();
                Ok(self)
            }
        }
    }

    /// Skip whitespace, then consume `token` if it is next.
    pub fn take_if(&mut self, token: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn make_error(&self, msg: impl Into<String>) -> Error {
        Error::at(self.index, msg)
    }

    fn eof(&self) -> Error {
        Error::unexpected_eof(self.index)
    }
}
