//! Grammar for formula documents
//!
//! - `literal`: identifiers, numbers, booleans and operator symbols
//! - `expression`: the precedence levels from `expr` down to `base`
//!
//! ```text
//! axiom      := { injectable } { def }
//! injectable := "$" id ":" id { "," id }
//! def        := id "=" expr!
//! ```
//!
//! A `!` marks a mandatory continuation: once the rule has committed, a
//! mismatch there aborts the whole parse.

mod expression;
mod literal;

use std::time::Instant;

use tracing::debug;

use crate::ast::{Definition, Injectable, Program};
use crate::lexer::Token;

use super::combinators::{BoxedParser, expect, literal, many};
use super::state::{ParseError, ParseFailure, ParseState, Parser};

pub use expression::{base, expr, factor, pred, sum, value};
pub use literal::{arith_op_0, arith_op_1, boolean, comp_op, ident, logic_op, number, unary_op};

/// injectable := "$" id ":" id { "," id }
pub fn injectable() -> BoxedParser<Injectable> {
    (literal("$") * ident() - literal(":") + ident() + many(literal(",") * ident()))
        >> |((group, first), rest)| Injectable {
            group,
            names: std::iter::once(first).chain(rest).collect(),
        }
}

/// def := id "=" expr!
pub fn definition() -> BoxedParser<Definition> {
    (ident() - literal("=") + expect("an expression after the \"=\" symbol", expr()))
        >> |(name, expr)| Definition { name, expr }
}

/// axiom := { injectable } { def }
pub fn program() -> BoxedParser<Program> {
    (many(injectable()) + many(definition()))
        >> |(injectables, definitions)| Program {
            injectables,
            definitions,
        }
}

/// Parse a whole token stream. Every token must belong to the program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let started = Instant::now();
    let mut state = ParseState::new(tokens);

    let program = program()
        .parse(&mut state)
        .map_err(|failure| match failure {
            ParseFailure::Fatal(err) => err,
            ParseFailure::NoMatch => ParseError::expected("a program", state.peek()),
        })?;

    if let Some(token) = state.peek() {
        return Err(ParseError::trailing_input(token));
    }

    debug!(
        elapsed = ?started.elapsed(),
        injectables = program.injectables.len(),
        definitions = program.definitions.len(),
        "parsed program"
    );
    Ok(program)
}
