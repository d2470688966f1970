use thiserror::Error;

use crate::lexer::{Location, Token, TokenKind};

/// A parse failure the caller sees. Both variants abort parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A mandatory continuation did not match.
    #[error("Expected {description}. '{}' found instead. At {}.", found_text(.found), found_location(.found))]
    Expected {
        description: String,
        found: Option<Token>,
    },
    /// The program ended before the token stream did.
    #[error("Unexpected token {kind} ({text}). Expected end of input. At {location}.")]
    TrailingInput {
        kind: TokenKind,
        text: String,
        location: Location,
    },
}

fn found_text(found: &Option<Token>) -> &str {
    found.as_ref().map_or("End of input", |token| token.text.as_str())
}

fn found_location(found: &Option<Token>) -> String {
    found
        .as_ref()
        .map_or_else(|| "end of input".to_string(), |token| token.location.to_string())
}

/// Why a rule did not produce a result.
///
/// `NoMatch` is recoverable: alternatives, repetitions and options try
/// something else. `Fatal` passes through every combinator untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    NoMatch,
    Fatal(ParseError),
}

impl ParseError {
    pub fn expected(description: impl Into<String>, found: Option<&Token>) -> Self {
        ParseError::Expected {
            description: description.into(),
            found: found.cloned(),
        }
    }

    pub fn trailing_input(token: &Token) -> Self {
        ParseError::TrailingInput {
            kind: token.kind,
            text: token.text.clone(),
            location: token.location,
        }
    }
}

impl From<ParseError> for ParseFailure {
    fn from(err: ParseError) -> Self {
        ParseFailure::Fatal(err)
    }
}

pub type ParseResult<T> = Result<T, ParseFailure>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
