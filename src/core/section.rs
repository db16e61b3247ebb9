//! Delimited sections: comments, CDATA and processing instructions
//!
//! All three share one algorithm: match the open delimiter literally, then
//! search for the close delimiter.

use super::cursor::Cursor;
use super::token::{Section, Token};
use crate::error::{ErrorKind, Result};
use crate::options::ParserOptions;

pub const COMMENT_OPEN: &str = "<!--";
pub const COMMENT_CLOSE: &str = "-->";
pub const CDATA_OPEN: &str = "<![CDATA[";
pub const CDATA_CLOSE: &str = "]]>";
pub const PI_OPEN: &str = "<?";
pub const PI_CLOSE: &str = "?>";

/// Consume a comment `<!--...-->`
pub fn comment<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<Token<'a>>> {
    eat_section(cursor, COMMENT_OPEN, COMMENT_CLOSE, options.allow_unclosed_sections)
        .map(|section| section.map(Token::Comment))
}

/// Consume a CDATA section `<![CDATA[...]]>`
pub fn cdata<'a>(cursor: &mut Cursor<'a>, options: &ParserOptions) -> Result<Option<Token<'a>>> {
    eat_section(cursor, CDATA_OPEN, CDATA_CLOSE, options.allow_unclosed_sections)
        .map(|section| section.map(Token::CData))
}

/// Consume a processing instruction `<?...?>`
pub fn processing_instruction<'a>(
    cursor: &mut Cursor<'a>,
    options: &ParserOptions,
) -> Result<Option<Token<'a>>> {
    eat_section(cursor, PI_OPEN, PI_CLOSE, options.allow_unclosed_sections)
        .map(|section| section.map(Token::ProcessingInstruction))
}

/// Consume a section delimited by `open` and `close`
///
/// Returns `Ok(None)` with the cursor untouched when `open` does not match.
/// Once `open` matched, a missing `close` is an error at end of input, or a
/// section running to end of input when `allow_unclosed` is set.
pub fn eat_section<'a>(
    cursor: &mut Cursor<'a>,
    open: &str,
    close: &str,
    allow_unclosed: bool,
) -> Result<Option<Section<'a>>> {
    let start = cursor.position();
    if !cursor.eat_str(open) {
        return Ok(None);
    }

    let content_start = cursor.position();
    let content_end = match cursor.find(close) {
        Some(pos) => {
            cursor.set_position(pos + close.len());
            pos
        }
        None => {
            cursor.set_position(cursor.input().len());
            if !allow_unclosed {
                return Err(cursor.error(ErrorKind::UnterminatedSection, format!("Expected {}", close)));
            }
            cursor.position()
        }
    };

    Ok(Some(Section {
        value: cursor.span(content_start, content_end),
        range: cursor.span(start, cursor.position()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::TokenKind;

    fn scan(input: &str) -> Result<Option<Section<'_>>> {
        let mut cursor = Cursor::new(input);
        eat_section(&mut cursor, COMMENT_OPEN, COMMENT_CLOSE, false)
    }

    #[test]
    fn test_comment() {
        let section = scan("<!-- foo bar -->").unwrap().unwrap();
        assert_eq!(section.value.content(), " foo bar ");
        assert_eq!(section.range.content(), "<!-- foo bar -->");
    }

    #[test]
    fn test_empty_comment() {
        let section = scan("<!---->").unwrap().unwrap();
        assert!(section.value.is_empty());
        assert_eq!(section.range.range(), (0, 7));
    }

    #[test]
    fn test_open_mismatch_rewinds() {
        let mut cursor = Cursor::new("<!- x");
        let section = eat_section(&mut cursor, COMMENT_OPEN, COMMENT_CLOSE, false).unwrap();
        assert!(section.is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_unclosed_is_error_at_end() {
        let err = scan("<!-- comment").unwrap_err();
        assert_eq!(err.message, "Expected -->");
        assert_eq!(err.position, 12);
        assert_eq!(err.kind, ErrorKind::UnterminatedSection);

        let err = scan("<!-- comment ->").unwrap_err();
        assert_eq!(err.position, 15);
    }

    #[test]
    fn test_unclosed_allowed() {
        let mut cursor = Cursor::new("<?php echo 1;");
        let section = eat_section(&mut cursor, PI_OPEN, PI_CLOSE, true).unwrap().unwrap();
        assert_eq!(section.value.content(), "php echo 1;");
        assert_eq!(section.range.range(), (0, 13));
        assert!(cursor.eof());
    }

    #[test]
    fn test_cdata_keeps_markup() {
        let mut cursor = Cursor::new("<![CDATA[ <foo> ]]>tail");
        let token = cdata(&mut cursor, &ParserOptions::default()).unwrap().unwrap();
        assert_eq!(token.kind(), TokenKind::CData);
        assert_eq!(token.value().unwrap().content(), " <foo> ");
        assert_eq!(cursor.remaining(), "tail");
    }
}
