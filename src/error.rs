//! Positioned tokenizer errors
//!
//! Every failure carries the byte offset where the violation was detected,
//! not the start of the enclosing construct.

use std::fmt;

/// Result alias used throughout the tokenizer
pub type Result<T> = std::result::Result<T, ParseError>;

/// Class of a tokenizer failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing `>`/`/>`, or an invalid character after `</`
    MalformedTag,
    /// Name expected but not found, or `=` without a usable value
    MalformedAttribute,
    /// Opening quote without a matching closing quote
    UnterminatedString,
    /// Comment, CDATA or processing instruction never closed
    UnterminatedSection,
    /// No matcher could classify the remaining input
    UnexpectedToken,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedTag => "malformed tag",
            ErrorKind::MalformedAttribute => "malformed attribute",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnterminatedSection => "unterminated section",
            ErrorKind::UnexpectedToken => "unexpected token",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised while tokenizing; fatal to the current parse call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at char {}", .position + 1)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offset into the input
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: usize) -> Self {
        ParseError {
            kind,
            message: message.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let err = ParseError::new(ErrorKind::MalformedTag, "Expected tag closing brace", 4);
        assert_eq!(err.to_string(), "Expected tag closing brace at char 5");
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::UnterminatedSection.to_string(), "unterminated section");
        assert_eq!(ErrorKind::UnexpectedToken.as_str(), "unexpected token");
    }
}
