//! Parser controller
//!
//! Drives the tokenizer and hands each token to a [`TokenHandler`]. The
//! handler receives the parser itself and may call [`Parser::pause`]; the
//! loop checks the flag after every handler call. [`Parser::resume`] (or a
//! second [`Parser::parse`]) restarts the loop from the current position.

use crate::core::token::Token;
use crate::core::tokenizer::Tokenizer;
use crate::error::Result;
use crate::options::ParserOptions;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Constructed, no parse run yet
    Idle,
    /// Inside the delivery loop
    Running,
    /// Stopped by a handler; resumable
    Paused,
    /// End of input reached
    Done,
}

/// Receives tokens in document order
pub trait TokenHandler<'a> {
    fn token(&mut self, token: Token<'a>, parser: &mut Parser<'a>);
}

impl<'a, F> TokenHandler<'a> for F
where
    F: FnMut(Token<'a>, &mut Parser<'a>),
{
    fn token(&mut self, token: Token<'a>, parser: &mut Parser<'a>) {
        self(token, parser)
    }
}

/// Handler that stores every token it receives
#[derive(Debug, Default, Clone)]
pub struct TokenCollector<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenCollector<'a> {
    /// Create an empty collector
    pub fn new() -> Self {
        TokenCollector { tokens: Vec::new() }
    }

    /// Tokens received so far, in document order
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

impl<'a> TokenHandler<'a> for TokenCollector<'a> {
    fn token(&mut self, token: Token<'a>, _parser: &mut Parser<'a>) {
        self.tokens.push(token);
    }
}

/// Pausable, callback-driven tokenizer
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    state: ParseState,
}

impl<'a> Parser<'a> {
    /// Create an idle parser positioned at the start of `input`
    pub fn new(input: &'a str, options: ParserOptions) -> Self {
        Parser {
            tokenizer: Tokenizer::new(input, options),
            state: ParseState::Idle,
        }
    }

    /// Current controller state
    #[inline]
    pub fn state(&self) -> ParseState {
        self.state
    }

    #[inline]
    pub fn options(&self) -> &ParserOptions {
        self.tokenizer.options()
    }

    /// Current byte offset into the input
    #[inline]
    pub fn position(&self) -> usize {
        self.tokenizer.position()
    }

    /// True once the whole input has been consumed
    #[inline]
    pub fn eof(&self) -> bool {
        self.tokenizer.eof()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == ParseState::Paused
    }

    /// Deliver tokens to `handler` until paused or out of input
    ///
    /// Calling this while a run is already in progress (from inside a
    /// handler) does nothing. After a pause it continues where the previous
    /// run stopped; after the end of input it emits nothing.
    pub fn parse<H: TokenHandler<'a> + ?Sized>(&mut self, handler: &mut H) -> Result<&mut Self> {
        if matches!(self.state, ParseState::Running | ParseState::Done) {
            return Ok(self);
        }

        tracing::debug!(position = self.position(), "parse run started");
        self.state = ParseState::Running;

        while !self.tokenizer.eof() && self.state != ParseState::Paused {
            let token = match self.tokenizer.next_token() {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(err) => {
                    tracing::debug!(position = err.position, message = %err.message, "parse failed");
                    self.state = ParseState::Idle;
                    return Err(err);
                }
            };
            handler.token(token, self);
        }

        if self.tokenizer.eof() {
            self.state = ParseState::Done;
            tracing::debug!("parse finished");
        } else {
            tracing::debug!(position = self.position(), "parse paused");
        }
        Ok(self)
    }

    /// Stop delivery after the current handler call returns
    pub fn pause(&mut self) {
        if self.state == ParseState::Running {
            self.state = ParseState::Paused;
        }
    }

    /// Continue a paused run; does nothing unless paused
    pub fn resume<H: TokenHandler<'a> + ?Sized>(&mut self, handler: &mut H) -> Result<&mut Self> {
        if self.state != ParseState::Paused {
            return Ok(self);
        }
        tracing::debug!(position = self.position(), "parse resumed");
        self.parse(handler)
    }
}

/// Parse `input` in one call, returning the parser for later resumption
pub fn parse_document<'a, H: TokenHandler<'a> + ?Sized>(
    input: &'a str,
    options: ParserOptions,
    handler: &mut H,
) -> Result<Parser<'a>> {
    let mut parser = Parser::new(input, options);
    parser.parse(handler)?;
    Ok(parser)
}

/// Collect every token of `input`
pub fn tokenize(input: &str, options: ParserOptions) -> Result<Vec<Token<'_>>> {
    Tokenizer::new(input, options).collect()
}
