//! Open/close tags and attribute lists
//!
//! A tag that does not get past `<name` (or `</`) is not a match and the
//! cursor is rewound. Anything malformed after that point is an error.

use super::cursor::{
    is_name_char, is_name_start_char, is_quote, is_whitespace, Cursor, ATTR_DELIMITER, TAG_CLOSE,
    TAG_END, TAG_START,
};
use super::expression::expression;
use super::token::{Attribute, AttributeValue, CloseTag, OpenTag, Span, TagAttribute, Token};
use crate::error::{ErrorKind, Result};
use crate::options::ParserOptions;

/// Consume an open or close tag
pub fn tag<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<Token<'a>>> {
    if let Some(open) = open_tag(cursor, options)? {
        return Ok(Some(Token::OpenTag(open)));
    }
    Ok(close_tag(cursor)?.map(Token::CloseTag))
}

fn open_tag<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<OpenTag<'a>>> {
    let start = cursor.position();
    if !cursor.eat(TAG_START) {
        return Ok(None);
    }
    let name = match ident(cursor) {
        Some(name) => name,
        None => {
            cursor.set_position(start);
            return Ok(None);
        }
    };

    let mut attributes = Vec::new();
    while !cursor.eof() {
        cursor.eat_while(is_whitespace);

        if let Some(attr) = attribute(cursor, options)? {
            attributes.push(attr);
            continue;
        }

        match cursor.peek() {
            Some(ch) if is_terminator(ch) => break,
            None => break,
            Some(_) => {
                return Err(cursor.error(ErrorKind::MalformedAttribute, "Unexpected attribute name"));
            }
        }
    }

    let self_close = cursor.eat(TAG_CLOSE);
    if !cursor.eat(TAG_END) {
        return Err(cursor.error(ErrorKind::MalformedTag, "Expected tag closing brace"));
    }

    Ok(Some(OpenTag {
        name,
        attributes,
        self_close,
        range: cursor.span(start, cursor.position()),
    }))
}

fn close_tag<'a>(cursor: &mut Cursor<'a>) -> Result<Option<CloseTag<'a>>> {
    let start = cursor.position();
    if !cursor.eat(TAG_START) {
        return Ok(None);
    }
    if !cursor.eat(TAG_CLOSE) {
        cursor.set_position(start);
        return Ok(None);
    }

    let name = ident(cursor)
        .ok_or_else(|| cursor.error(ErrorKind::MalformedTag, "Unexpected character"))?;
    if !cursor.eat(TAG_END) {
        return Err(cursor.error(ErrorKind::MalformedTag, "Expected tag closing brace"));
    }

    Ok(Some(CloseTag {
        name,
        range: cursor.span(start, cursor.position()),
    }))
}

/// Consume an XML-style name
fn ident<'a>(cursor: &mut Cursor<'a>) -> Option<Span<'a>> {
    if cursor.peek().is_some_and(is_name_start_char) && cursor.consume(is_name_char) {
        return Some(cursor.token());
    }
    None
}

fn attribute<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<TagAttribute<'a>>> {
    if options.allow_expressions {
        if let Some(expr) = expression(cursor) {
            return Ok(Some(TagAttribute::Expression(expr)));
        }
    }

    let name = match ident(cursor) {
        Some(name) => name,
        None => return Ok(None),
    };

    let mut value = None;
    if cursor.eat(ATTR_DELIMITER) {
        value = attribute_value(cursor, options)?;
        if value.is_none() {
            return Err(cursor.error(ErrorKind::MalformedAttribute, "Expecting attribute value"));
        }
    }

    Ok(Some(TagAttribute::Attribute(Attribute {
        name,
        value,
        range: cursor.span(name.start(), cursor.position()),
    })))
}

fn attribute_value<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<AttributeValue<'a>>> {
    if options.allow_expressions {
        if let Some(expr) = expression(cursor) {
            return Ok(Some(AttributeValue::Expression(expr)));
        }
    }

    let start = cursor.position();
    if cursor.peek().is_some_and(is_quote) {
        if !cursor.eat_quoted() {
            return Err(cursor.error(ErrorKind::UnterminatedString, "Unable to consume quoted string"));
        }
        return Ok(Some(AttributeValue::Quoted {
            value: cursor.span(start + 1, cursor.position() - 1),
            range: cursor.span(start, cursor.position()),
        }));
    }

    if cursor.eat_while(is_unquoted) {
        return Ok(Some(AttributeValue::Unquoted(cursor.span(start, cursor.position()))));
    }

    Ok(None)
}

#[inline]
fn is_terminator(ch: char) -> bool {
    ch == TAG_END || ch == TAG_CLOSE
}

/// Unquoted values stop at whitespace, quotes, tag terminators and `=`
#[inline]
fn is_unquoted(ch: char) -> bool {
    !is_quote(ch) && !is_whitespace(ch) && !is_terminator(ch) && ch != ATTR_DELIMITER
}
