//! Token dispatch
//!
//! Classifies the next lexical unit by trying each matcher in a fixed order:
//! - Tags (open and close)
//! - Comments
//! - CDATA sections
//! - Processing instructions
//! - Text
//!
//! A matcher either produces a token, declines with the cursor restored, or
//! fails with a positioned error that is never retried.

use std::iter::FusedIterator;

use super::cursor::Cursor;
use super::token::Token;
use super::{section, tag, text};
use crate::error::{ErrorKind, Result};
use crate::options::ParserOptions;

/// Signature shared by every matcher
pub type Matcher = for<'a> fn(&mut Cursor<'a>, &ParserOptions) -> Result<Option<Token<'a>>>;

/// Matchers in priority order
pub const MATCHERS: [Matcher; 5] = [
    tag::tag,
    section::comment,
    section::cdata,
    section::processing_instruction,
    text::text,
];

/// Run the matcher chain once at the cursor
pub fn next<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<Token<'a>>> {
    for matcher in MATCHERS {
        if let Some(token) = matcher(cursor, options)? {
            return Ok(Some(token));
        }
    }
    Ok(None)
}

/// Pull tokenizer over a complete input
///
/// Also usable as an iterator of `Result<Token>`; iteration stops after the
/// first error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `input`
    pub fn new(input: &'a str, options: ParserOptions) -> Self {
        Tokenizer {
            cursor: Cursor::new(input),
            options,
            failed: false,
        }
    }

    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Get the current position in the input
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    pub fn eof(&self) -> bool {
        self.cursor.eof()
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        if self.cursor.eof() {
            return Ok(None);
        }

        match next(&mut self.cursor, &self.options)? {
            Some(token) => {
                let (start, end) = token.range().range();
                tracing::trace!(kind = %token.kind(), start, end, "token");
                Ok(Some(token))
            }
            None => Err(self.cursor.error(ErrorKind::UnexpectedToken, "Unexpected token")),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::TokenKind;

    fn kinds(input: &str, options: ParserOptions) -> Vec<TokenKind> {
        Tokenizer::new(input, options)
            .map(|token| token.unwrap().kind())
            .collect()
    }

    #[test]
    fn test_simple_element() {
        let mut tok = Tokenizer::new("<root>content</root>", ParserOptions::default());

        let t1 = tok.next_token().unwrap().unwrap();
        assert_eq!(t1.kind(), TokenKind::OpenTag);
        assert_eq!(t1.name().unwrap().content(), "root");

        let t2 = tok.next_token().unwrap().unwrap();
        assert_eq!(t2.kind(), TokenKind::Text);
        assert_eq!(t2.value().unwrap().content(), "content");

        let t3 = tok.next_token().unwrap().unwrap();
        assert_eq!(t3.kind(), TokenKind::CloseTag);
        assert_eq!(t3.name().unwrap().content(), "root");

        assert!(tok.next_token().unwrap().is_none());
        assert!(tok.eof());
    }

    #[test]
    fn test_dispatch_order() {
        let input = "<?xml version=\"1.0\"?><a><!-- c --><![CDATA[x]]>t</a>";
        assert_eq!(
            kinds(input, ParserOptions::default()),
            vec![
                TokenKind::ProcessingInstruction,
                TokenKind::OpenTag,
                TokenKind::Comment,
                TokenKind::CData,
                TokenKind::Text,
                TokenKind::CloseTag,
            ]
        );
    }

    #[test]
    fn test_braces_in_text_need_expressions() {
        let input = "<p>Hi {user.name}!</p>";
        assert_eq!(
            kinds(input, ParserOptions::new().with_expressions(true)),
            vec![TokenKind::OpenTag, TokenKind::Text, TokenKind::CloseTag]
        );

        let mut tok = Tokenizer::new(input, ParserOptions::default());
        assert!(tok.next_token().unwrap().unwrap().is_open_tag());
        assert_eq!(tok.next_token().unwrap().unwrap().range().content(), "Hi ");
        let err = tok.next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.position, 6);
    }

    #[test]
    fn test_unexpected_token() {
        let mut tok = Tokenizer::new("a < b", ParserOptions::default());
        assert_eq!(tok.next_token().unwrap().unwrap().range().content(), "a ");
        let err = tok.next_token().unwrap_err();
        assert_eq!(err.message, "Unexpected token");
        assert_eq!(err.position, 2);
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_brace_after_text() {
        let mut tok = Tokenizer::new("a{b", ParserOptions::default());
        assert_eq!(tok.next_token().unwrap().unwrap().range().content(), "a");
        let err = tok.next_token().unwrap_err();
        assert_eq!(err.message, "Unexpected token");
        assert_eq!(err.position, 1);

        let options = ParserOptions::new().with_expressions(true);
        let tokens: Vec<_> = Tokenizer::new("a{b", options).collect::<Result<_>>().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Text);
        assert_eq!(tokens[0].value().unwrap().content(), "a{b");
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut tok = Tokenizer::new("ok<foo", ParserOptions::default());
        assert!(tok.next().unwrap().is_ok());
        assert!(tok.next().unwrap().is_err());
        assert!(tok.next().is_none());
        assert!(tok.next().is_none());
    }
}
