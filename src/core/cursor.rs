//! Character cursor over the input text
//!
//! Positions are byte offsets and always sit on a char boundary. Matchers
//! capture `position()` before a trial and restore it with `set_position()`
//! when the trial does not match. Substring searches use memchr, which picks
//! SSE2/AVX2/NEON at runtime.

use memchr::{memchr, memchr2, memmem};

use super::token::Span;
use crate::error::{ErrorKind, ParseError};

pub const TAG_START: char = '<';
pub const TAG_END: char = '>';
pub const TAG_CLOSE: char = '/';
pub const ATTR_DELIMITER: char = '=';
pub const EXPRESSION_START: char = '{';
pub const EXPRESSION_END: char = '}';
pub const ESCAPE: char = '\\';

/// Read cursor over a borrowed input
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the beginning of `input`
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// The whole input, independent of the current position
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Restore a previously captured position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Unconsumed input
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Return the current char and advance past it
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Retreat by one char
    #[inline]
    pub fn back_up(&mut self) {
        if let Some(ch) = self.input[..self.pos].chars().next_back() {
            self.pos -= ch.len_utf8();
        }
    }

    /// Advance only if the current char is `expected`
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        self.eat_if(|ch| ch == expected)
    }

    /// Advance only if the current char satisfies `pred`
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.pos += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Advance while `pred` holds; true if anything was consumed
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let start = self.pos;
        while self.eat_if(&pred) {}
        self.pos != start
    }

    /// Like `eat_while`, but marks the consumed run as the current token
    pub fn consume(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let start = self.pos;
        if self.eat_while(pred) {
            self.start = start;
            true
        } else {
            false
        }
    }

    /// Consume `literal` entirely or not at all; marks it as the current token
    pub fn eat_str(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal) {
            self.start = self.pos;
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume a single- or double-quoted string, honouring backslash escapes
    ///
    /// An unterminated string rewinds to the opening quote and returns false.
    pub fn eat_quoted(&mut self) -> bool {
        let start = self.pos;
        let quote = match self.peek() {
            Some(ch) if is_quote(ch) => ch,
            _ => return false,
        };
        self.pos += 1;

        while let Some(ch) = self.next() {
            if ch == quote {
                self.start = start;
                return true;
            }
            if ch == ESCAPE {
                self.next();
            }
        }

        self.pos = start;
        false
    }

    /// Find the next occurrence of `needle` at or after the current position
    #[inline]
    pub fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.remaining().as_bytes(), needle.as_bytes()).map(|i| self.pos + i)
    }

    /// Find the next `<`, or the next `<` or `{` when `braces` is set
    #[inline]
    pub fn find_text_boundary(&self, braces: bool) -> Option<usize> {
        let bytes = self.remaining().as_bytes();
        let found = if braces {
            memchr2(TAG_START as u8, EXPRESSION_START as u8, bytes)
        } else {
            memchr(TAG_START as u8, bytes)
        };
        found.map(|i| self.pos + i)
    }

    /// Span over `start..end` of the input
    #[inline]
    pub fn span(&self, start: usize, end: usize) -> Span<'a> {
        Span::new(self.input, start, end)
    }

    /// Span from the marked token start to the current position
    #[inline]
    pub fn token(&self) -> Span<'a> {
        self.span(self.start, self.pos)
    }

    /// Error positioned at the current char
    #[inline]
    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(kind, message, self.pos)
    }
}

/// Space, tab, no-break space, line feed or carriage return
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{A0}' | '\n' | '\r')
}

#[inline]
pub fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

/// First char of a tag or attribute name: ASCII letter, underscore or colon
#[inline]
pub fn is_name_start_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == ':'
}

/// Continuation char of a name: start chars plus digits, hyphen and period
#[inline]
pub fn is_name_char(ch: char) -> bool {
    is_name_start_char(ch) || ch.is_ascii_digit() || ch == '-' || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_next_back_up() {
        let mut cursor = Cursor::new("aé<");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.next(), Some('é'));
        assert_eq!(cursor.position(), 3);
        cursor.back_up();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.peek(), Some('é'));
    }

    #[test]
    fn test_eat_while_marks_token() {
        let mut cursor = Cursor::new("element-name>");
        assert!(cursor.consume(is_name_char));
        assert_eq!(cursor.token().content(), "element-name");
        assert_eq!(cursor.position(), 12);
        assert!(!cursor.eat_while(is_name_char));
        assert!(cursor.eat(TAG_END));
        assert!(cursor.eof());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_eat_str_is_all_or_nothing() {
        let mut cursor = Cursor::new("<!-x");
        assert!(!cursor.eat_str("<!--"));
        assert_eq!(cursor.position(), 0);
        assert!(cursor.eat_str("<!-"));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_eat_quoted() {
        let mut cursor = Cursor::new(r#""a\"b" rest"#);
        assert!(cursor.eat_quoted());
        assert_eq!(cursor.token().content(), r#""a\"b""#);

        let mut cursor = Cursor::new("'open");
        assert!(!cursor.eat_quoted());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_find() {
        let mut cursor = Cursor::new("<!-- a -- b -->");
        cursor.set_position(4);
        assert_eq!(cursor.find("-->"), Some(12));
        assert_eq!(cursor.find("?>"), None);
        assert_eq!(cursor.find_text_boundary(false), None);
    }

    #[test]
    fn test_find_text_boundary() {
        let cursor = Cursor::new("ab {c} <d>");
        assert_eq!(cursor.find_text_boundary(false), Some(7));
        assert_eq!(cursor.find_text_boundary(true), Some(3));
    }

    #[test]
    fn test_char_classes() {
        assert!(is_whitespace('\u{A0}'));
        assert!(!is_whitespace('x'));
        assert!(is_name_start_char(':'));
        assert!(!is_name_start_char('1'));
        assert!(is_name_char('1'));
        assert!(!is_name_char('='));
    }
}
