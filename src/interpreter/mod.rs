mod eval;
mod scope;
mod value;

pub use scope::{Definitions, Overrides, Scope};
pub use value::RValue;

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::ast::Program;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A term was reached again while evaluating its own definition.
    #[error("Term '{name}' has a circular definition.")]
    Circular { name: String },
}

/// Evaluates terms of one parsed program
///
/// The definition map is built once; each call to [`Evaluator::resolve`]
/// runs against the caller's override table, which doubles as the memo cache.
pub struct Evaluator<'p> {
    definitions: Definitions<'p>,
}

impl<'p> Evaluator<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            definitions: Definitions::new(program),
        }
    }

    pub fn resolve(&self, name: &str, overrides: &mut Overrides) -> Result<RValue, EvalError> {
        let started = Instant::now();
        let value = Scope::new(&self.definitions, overrides).resolve(name)?;
        debug!(term = name, elapsed = ?started.elapsed(), "evaluated term");
        Ok(value)
    }
}

/// Evaluate `name` against `program`, reading and filling `overrides`.
pub fn evaluate(
    program: &Program,
    name: &str,
    overrides: &mut Overrides,
) -> Result<RValue, EvalError> {
    Evaluator::new(program).resolve(name, overrides)
}
