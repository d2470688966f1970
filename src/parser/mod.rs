pub mod combinators;
pub mod grammar;
pub mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::*;

use crate::ast::Program;
use crate::error::Error;
use crate::lexer::tokenize;

/// Tokenize and parse formula source in one step.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse(tokens)?)
}
