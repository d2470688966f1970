use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::ast::Program;
use crate::ast::expression::Expr;

use super::EvalError;
use super::value::RValue;

/// Injected values and memoized results of one evaluation session.
pub type Overrides = HashMap<String, RValue>;

/// Term name to defining expression, built once per program.
#[derive(Debug, Clone)]
pub struct Definitions<'p>(HashMap<&'p str, &'p Expr>);

impl<'p> Definitions<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self(program.definitions())
    }

    pub fn get(&self, name: &str) -> Option<&'p Expr> {
        self.0.get(name).copied()
    }
}

/// Name resolution during one evaluation session
pub struct Scope<'a> {
    definitions: &'a Definitions<'a>,
    overrides: &'a mut Overrides,
    /// Terms whose definition is being evaluated right now.
    resolving: HashSet<String>,
}

impl<'a> Scope<'a> {
    pub fn new(definitions: &'a Definitions<'a>, overrides: &'a mut Overrides) -> Self {
        Self {
            definitions,
            overrides,
            resolving: HashSet::new(),
        }
    }

    /// Resolve a name: overrides first, then the definition (memoized into
    /// the overrides), else the name itself as an opaque string. Reaching a
    /// term again while its own definition is still being evaluated fails.
    pub fn resolve(&mut self, name: &str) -> Result<RValue, EvalError> {
        if let Some(value) = self.overrides.get(name) {
            trace!(term = name, "resolved from overrides");
            return Ok(value.clone());
        }

        let Some(expr) = self.definitions.get(name) else {
            return Ok(RValue::String(name.to_string()));
        };

        if !self.resolving.insert(name.to_string()) {
            return Err(EvalError::Circular {
                name: name.to_string(),
            });
        }

        let result = expr.eval(self);
        self.resolving.remove(name);

        let value = result?;
        self.overrides.insert(name.to_string(), value.clone());
        Ok(value)
    }
}
