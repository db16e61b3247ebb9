//! markup-stream - Streaming tokenizer for XML-like markup
//!
//! Scans a complete in-memory document and emits structural tokens (tags,
//! comments, CDATA sections, processing instructions and text runs) without
//! building a tree. With expressions enabled, tags may carry `{...}` code
//! fragments as attributes or attribute values. Tokens are zero-copy: every
//! value is a [`Span`] into the input.
//!
//! Entry points:
//! - [`Parser`]: callback-driven, pausable and resumable
//! - [`parse_document`]: construct a parser and run it once
//! - [`Tokenizer`] / [`tokenize`]: pull-style iteration
//!
//! ```
//! use markup_stream::{parse_document, Parser, ParserOptions, Token};
//!
//! let mut names = Vec::new();
//! let parser = parse_document(
//!     "<p class=intro>Hello</p>",
//!     ParserOptions::default(),
//!     &mut |token: Token<'_>, _: &mut Parser<'_>| {
//!         if let Token::OpenTag(tag) = token {
//!             names.push(tag.name.content().to_string());
//!         }
//!     },
//! )
//! .unwrap();
//!
//! assert!(parser.eof());
//! assert_eq!(names, ["p"]);
//! ```

pub mod core;
mod error;
mod options;
mod parser;

pub use crate::core::token::{
    Attribute, AttributeValue, CloseTag, Expression, OpenTag, Section, Span, TagAttribute, Text, Token,
    TokenKind,
};
pub use crate::core::tokenizer::Tokenizer;
pub use error::{ErrorKind, ParseError, Result};
pub use options::ParserOptions;
pub use parser::{parse_document, tokenize, ParseState, Parser, TokenCollector, TokenHandler};
