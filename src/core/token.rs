//! Token model
//!
//! Tokens reference the input through [`Span`]s; text is only sliced when a
//! consumer asks for `content()`.

use std::fmt;

/// A range over the input text
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    #[inline]
    pub fn new(source: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.len());
        Span { source, start, end }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive)
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The referenced text
    #[inline]
    pub fn content(&self) -> &'a str {
        &self.source[self.start..self.end]
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {:?}", self.start, self.end, self.content())
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

/// Kind of a top-level token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Element start tag: `<name ...>` or `<name .../>`
    OpenTag,
    /// Element end tag: `</name>`
    CloseTag,
    /// `<!--...-->`
    Comment,
    /// `<![CDATA[...]]>`
    CData,
    /// `<?...?>`
    ProcessingInstruction,
    Text,
}

impl TokenKind {
    /// Type tag used when tokens are reported to other tools
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::OpenTag => "open",
            TokenKind::CloseTag => "close",
            TokenKind::Comment => "comment",
            TokenKind::CData => "cdata",
            TokenKind::ProcessingInstruction => "processing-instruction",
            TokenKind::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    OpenTag(OpenTag<'a>),
    CloseTag(CloseTag<'a>),
    Comment(Section<'a>),
    CData(Section<'a>),
    ProcessingInstruction(Section<'a>),
    Text(Text<'a>),
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpenTag(_) => TokenKind::OpenTag,
            Token::CloseTag(_) => TokenKind::CloseTag,
            Token::Comment(_) => TokenKind::Comment,
            Token::CData(_) => TokenKind::CData,
            Token::ProcessingInstruction(_) => TokenKind::ProcessingInstruction,
            Token::Text(_) => TokenKind::Text,
        }
    }

    /// Full span of the construct, delimiters included
    pub fn range(&self) -> Span<'a> {
        match self {
            Token::OpenTag(tag) => tag.range,
            Token::CloseTag(tag) => tag.range,
            Token::Comment(section) | Token::CData(section) | Token::ProcessingInstruction(section) => {
                section.range
            }
            Token::Text(text) => text.range,
        }
    }

    /// Element name for open and close tags
    pub fn name(&self) -> Option<Span<'a>> {
        match self {
            Token::OpenTag(tag) => Some(tag.name),
            Token::CloseTag(tag) => Some(tag.name),
            _ => None,
        }
    }

    /// Inner value of sections and text
    pub fn value(&self) -> Option<Span<'a>> {
        match self {
            Token::Comment(section) | Token::CData(section) | Token::ProcessingInstruction(section) => {
                Some(section.value)
            }
            Token::Text(text) => Some(text.value),
            Token::OpenTag(_) | Token::CloseTag(_) => None,
        }
    }

    #[inline]
    pub fn is_open_tag(&self) -> bool {
        matches!(self, Token::OpenTag(_))
    }

    #[inline]
    pub fn is_close_tag(&self) -> bool {
        matches!(self, Token::CloseTag(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub name: Span<'a>,
    pub attributes: Vec<TagAttribute<'a>>,
    /// Terminated by `/>`
    pub self_close: bool,
    pub range: Span<'a>,
}

impl<'a> OpenTag<'a> {
    /// Look up a named attribute
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes
            .iter()
            .filter_map(TagAttribute::as_attribute)
            .find(|attr| attr.name.content() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseTag<'a> {
    pub name: Span<'a>,
    pub range: Span<'a>,
}

/// Comment, CDATA or processing instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Content between the delimiters
    pub value: Span<'a>,
    pub range: Span<'a>,
}

/// Literal text run; `value` and `range` cover the same span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<'a> {
    pub value: Span<'a>,
    pub range: Span<'a>,
}

impl<'a> Text<'a> {
    pub fn new(span: Span<'a>) -> Self {
        Text { value: span, range: span }
    }
}

/// Brace-delimited code fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    /// Content between the outer braces
    pub value: Span<'a>,
    /// Braces included
    pub range: Span<'a>,
}

/// Item of an open tag's attribute list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAttribute<'a> {
    Attribute(Attribute<'a>),
    /// Expression in attribute-name position, e.g. `<div {props}>`
    Expression(Expression<'a>),
}

impl<'a> TagAttribute<'a> {
    pub fn as_attribute(&self) -> Option<&Attribute<'a>> {
        match self {
            TagAttribute::Attribute(attr) => Some(attr),
            TagAttribute::Expression(_) => None,
        }
    }

    pub fn range(&self) -> Span<'a> {
        match self {
            TagAttribute::Attribute(attr) => attr.range,
            TagAttribute::Expression(expr) => expr.range,
        }
    }

    /// Type tag: `attribute` or `expression`
    pub fn kind(&self) -> &'static str {
        match self {
            TagAttribute::Attribute(_) => "attribute",
            TagAttribute::Expression(_) => "expression",
        }
    }
}

/// `name` or `name=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: Span<'a>,
    /// `None` for boolean attributes
    pub value: Option<AttributeValue<'a>>,
    pub range: Span<'a>,
}

impl<'a> Attribute<'a> {
    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    /// `"..."` or `'...'`; `value` excludes the quotes
    Quoted { value: Span<'a>, range: Span<'a> },
    /// Bare run of characters
    Unquoted(Span<'a>),
    Expression(Expression<'a>),
}

impl<'a> AttributeValue<'a> {
    pub fn value(&self) -> Span<'a> {
        match self {
            AttributeValue::Quoted { value, .. } => *value,
            AttributeValue::Unquoted(span) => *span,
            AttributeValue::Expression(expr) => expr.value,
        }
    }

    pub fn range(&self) -> Span<'a> {
        match self {
            AttributeValue::Quoted { range, .. } => *range,
            AttributeValue::Unquoted(span) => *span,
            AttributeValue::Expression(expr) => expr.range,
        }
    }

    /// Type tag: `quoted`, `unquoted` or `expression`
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Quoted { .. } => "quoted",
            AttributeValue::Unquoted(_) => "unquoted",
            AttributeValue::Expression(_) => "expression",
        }
    }
}
