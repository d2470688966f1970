//! # Pricelang - A Small Formula Language for Pricing Rules
//!
//! Pricelang documents describe how prices are derived. A document declares
//! groups of *injectable* names, whose values come from outside, and a list of
//! *terms*, each defined by an expression over numbers, booleans, other terms
//! and injectables.
//!
//! ```text
//! $inputs: base_price, discounted
//!
//! discount = if discounted then 0.25 else 0 end
//! total = base_price * (1 - discount)
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → AST (ast::Program)
//!     ↓
//! [Validator] → Diagnostics (optional, never blocks evaluation)
//!     ↓
//! [Interpreter] → Runtime Value (interpreter::RValue)
//! ```
//!
//! Evaluation is lazy: only the terms needed for the requested one are
//! computed. Every computed term is written back into the caller's override
//! table, so repeated requests in the same session are served from it.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization with line/column locations
//! - [`ast`] - Syntax tree of a formula document
//! - [`parser`] - Combinator engine and the formula grammar
//! - [`validate`] - Static checks producing located diagnostics
//! - [`interpreter`] - Lazy, memoizing evaluation of terms
//! - [`fmt`] - Pretty printing of documents
//! - [`pricing`] - Schema registry and batch pricing of items
//! - [`error`] - The crate-wide error type

pub mod ast;
pub mod error;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod pricing;
pub mod validate;

pub use error::Error;

use interpreter::{Overrides, RValue};

/// Parse `source` and evaluate the term `name` in a fresh session.
///
/// `overrides` seeds the session, usually with the values of injectables.
pub fn evaluate_source(
    source: &str,
    name: &str,
    overrides: Option<Overrides>,
) -> Result<RValue, Error> {
    let program = parser::parse_source(source)?;
    let mut overrides = overrides.unwrap_or_default();
    Ok(interpreter::evaluate(&program, name, &mut overrides)?)
}
