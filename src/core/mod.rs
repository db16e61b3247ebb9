//! Core tokenizing primitives
//!
//! - Cursor: character-level read position with backtracking
//! - Token: span-based token model (zero-copy)
//! - Section: shared scanner for comments, CDATA and processing instructions
//! - Tag: open/close tags and attribute lists
//! - Expression: balanced `{...}` fragments
//! - Text: literal text runs
//! - Tokenizer: ordered matcher dispatch and pull iterator

pub mod cursor;
pub mod expression;
pub mod section;
pub mod tag;
pub mod text;
pub mod token;
pub mod tokenizer;
