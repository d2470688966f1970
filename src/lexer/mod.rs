//! # Lexer
//!
//! Splits formula source into located [`Token`]s. At every position the
//! categories are tried in a fixed order (whitespace, identifier, number,
//! symbol) and the first one matching at offset 0 wins. Whitespace is
//! consumed but never emitted.
//!
//! Keywords (`if`, `then`, `else`, `end`, `true`, `false`) are plain
//! identifiers at this level; the grammar matches them by text.

use std::fmt;
use std::time::Instant;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// How many characters of unrecognized input a [`LexError`] quotes.
const SNIPPET_LENGTH: usize = 32;

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"^\s+").unwrap();
    static ref IDENT_RE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap();
    // Multi-character forms come first so `>=` wins over `>` and `&&` over `&`.
    static ref SYMBOL_RE: Regex =
        Regex::new(r"^(==|=|<=|<|>=|>|!=|!|&&|&|\|\||\||,|\$|\+|-|\*|/|\(|\)|:)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Id,
    Num,
    Symbol,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Id => "id",
            TokenKind::Num => "num",
            TokenKind::Symbol => "symbol",
        })
    }
}

/// A `(line, column)` pair. Lines start at 1, columns at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Move past `text`, counting newlines inside it.
    fn advance(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(last_newline) => {
                self.line += text.matches('\n').count();
                self.column = text[last_newline + 1..].chars().count();
            }
            None => self.column += text.chars().count(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        format!("{} '{}'", self.kind, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot split input, in '{snippet}...', at {location}")]
pub struct LexError {
    pub location: Location,
    pub snippet: String,
}

/// Tokenize `input`, failing on the first position no category matches.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let started = Instant::now();
    let mut location = Location::default();
    let mut tokens = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let (kind, text) = next_match(rest).ok_or_else(|| LexError {
            location,
            snippet: rest.chars().take(SNIPPET_LENGTH).collect(),
        })?;

        if let Some(kind) = kind {
            tokens.push(Token::new(kind, text, location));
        }

        location.advance(text);
        rest = &rest[text.len()..];
    }

    debug!(elapsed = ?started.elapsed(), tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Whether `text` is exactly one number literal, such as `12` or `0.25`.
pub fn is_number_literal(text: &str) -> bool {
    NUMBER_RE.find(text).is_some_and(|m| m.end() == text.len())
}

/// First category matching at the start of `input`. `None` as kind marks whitespace.
fn next_match(input: &str) -> Option<(Option<TokenKind>, &str)> {
    let categories: [(Option<TokenKind>, &Regex); 4] = [
        (None, &*WHITESPACE_RE),
        (Some(TokenKind::Id), &*IDENT_RE),
        (Some(TokenKind::Num), &*NUMBER_RE),
        (Some(TokenKind::Symbol), &*SYMBOL_RE),
    ];

    categories
        .into_iter()
        .find_map(|(kind, re)| re.find(input).map(|m| (kind, m.as_str())))
}
