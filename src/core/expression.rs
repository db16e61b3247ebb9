//! Embedded `{...}` code fragments
//!
//! Only recognized inside tags, as an attribute or an attribute value, and
//! only when expressions are enabled.

use super::cursor::{Cursor, ESCAPE, EXPRESSION_END, EXPRESSION_START};
use super::token::Expression;

/// Consume a balanced brace pair at the cursor
///
/// Nested braces must balance. Quoted strings are skipped whole, so braces
/// inside them do not count, and a backslash escapes the next char. Hitting
/// end of input before the pair closes rewinds the cursor and yields `None`.
pub fn expression<'a>(cursor: &mut Cursor<'a>) -> Option<Expression<'a>> {
    let start = cursor.position();
    if !cursor.eat(EXPRESSION_START) {
        return None;
    }

    let mut depth = 1usize;
    while !cursor.eof() {
        if cursor.eat_quoted() {
            continue;
        }

        match cursor.next() {
            Some(EXPRESSION_START) => depth += 1,
            Some(EXPRESSION_END) => {
                depth -= 1;
                if depth == 0 {
                    let end = cursor.position();
                    return Some(Expression {
                        value: cursor.span(start + 1, end - 1),
                        range: cursor.span(start, end),
                    });
                }
            }
            Some(ESCAPE) => {
                cursor.next();
            }
            _ => {}
        }
    }

    cursor.set_position(start);
    None
}
