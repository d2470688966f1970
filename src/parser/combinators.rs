use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::ast::Terminal;
use crate::lexer::{Token, TokenKind};

use super::state::{ParseError, ParseFailure, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U).
    /// On a recoverable failure the position is rewound to where self started.
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            let result = self
                .parse(state)
                .and_then(|a| other.parse(state).map(|b| (a, b)));
            if matches!(result, Err(ParseFailure::NoMatch)) {
                state.restore(pos);
            }
            result
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        self.seq(other).map(|(a, _)| a)
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.seq(other).map(|(_, b)| b)
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Choice: try self, if it does not match try other.
    /// A fatal error from self is returned as is.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            match self.parse(state) {
                Err(ParseFailure::NoMatch) => {
                    state.restore(pos);
                    other.parse(state)
                }
                result => result,
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

fn terminal_if<F: Fn(&Token) -> bool + 'static>(predicate: F) -> BoxedParser<Terminal> {
    BoxedParser::new(move |state: &mut ParseState| match state.peek() {
        Some(tok) if predicate(tok) => {
            let tok = state.advance().ok_or(ParseFailure::NoMatch)?;
            Ok(Terminal::new(tok.text, tok.location))
        }
        _ => Err(ParseFailure::NoMatch),
    })
}

/// Match one token whose text is exactly `text`, whatever its kind.
pub fn literal(text: &'static str) -> BoxedParser<Terminal> {
    terminal_if(move |tok| tok.text == text)
}

/// Match one token of the given kind.
pub fn token(kind: TokenKind) -> BoxedParser<Terminal> {
    terminal_if(move |tok| tok.kind == kind)
}

/// Mandatory continuation: a non-match becomes a fatal error naming
/// `description` and the token found at the current position.
pub fn expect<T: 'static>(description: &'static str, parser: BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| match parser.parse(state) {
        Err(ParseFailure::NoMatch) => {
            Err(ParseError::expected(description, state.peek()).into())
        }
        result => result,
    })
}

/// Defer building a parser until it runs, for recursive rules.
pub fn lazy<T: 'static>(build: fn() -> BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| build().parse(state))
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        loop {
            let pos = state.position();
            match parser.parse(state) {
                Ok(item) => results.push(item),
                Err(ParseFailure::NoMatch) => {
                    state.restore(pos);
                    break;
                }
                Err(fatal) => return Err(fatal),
            }
        }
        Ok(results)
    })
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => Ok(Some(item)),
            Err(ParseFailure::NoMatch) => {
                state.restore(pos);
                Ok(None)
            }
            Err(fatal) => Err(fatal),
        }
    })
}
