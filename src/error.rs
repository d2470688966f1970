use thiserror::Error;

use crate::interpreter::EvalError;
use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::pricing::PricingError;

/// Any failure of the formula pipeline. Validation diagnostics are data, not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}
