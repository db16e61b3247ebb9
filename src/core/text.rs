//! Literal text runs
//!
//! A run ends where markup may begin. In unsafe mode a `<` that is not
//! followed by a name start, `/`, `!` or `?` stays part of the text. With
//! expressions disabled a `{` also ends the run; with them enabled braces
//! are ordinary text.

use super::cursor::{is_name_start_char, Cursor, EXPRESSION_START, TAG_CLOSE, TAG_START};
use super::token::{Text, Token};
use crate::error::Result;
use crate::options::ParserOptions;

/// Consume text up to the next markup boundary
pub fn text<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<Token<'a>>> {
    let start = cursor.position();

    while !cursor.eof() {
        // Skip straight to the next char that could end the run
        match cursor.find_text_boundary(!options.allow_expressions) {
            Some(pos) => cursor.set_position(pos),
            None => {
                cursor.set_position(cursor.input().len());
                break;
            }
        }

        if !options.allow_expressions && cursor.peek() == Some(EXPRESSION_START) {
            break;
        }

        if cursor.eat(TAG_START) && (!options.allow_unsafe || is_control(cursor)) {
            cursor.back_up();
            break;
        }
    }

    if cursor.position() == start {
        return Ok(None);
    }
    Ok(Some(Token::Text(Text::new(cursor.span(start, cursor.position())))))
}

/// Whether the char after a `<` looks like the start of markup
fn is_control(cursor: &Cursor<'_>) -> bool {
    match cursor.peek() {
        Some(ch) => is_name_start_char(ch) || ch == TAG_CLOSE || ch == '!' || ch == '?',
        None => false,
    }
}
