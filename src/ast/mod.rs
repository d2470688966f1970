use std::collections::HashMap;

use crate::lexer::Location;

pub mod expression;

use expression::Expr;

/// A matched terminal: an identifier, a number, or a fixed literal such as `"+"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub text: String,
    pub location: Location,
}

impl Terminal {
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }
}

/// The root of a parsed formula document (`AXIOM`).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub injectables: Vec<Injectable>,
    pub definitions: Vec<Definition>,
}

/// `$group: a, b, c` - names expected to be supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Injectable {
    pub group: Terminal,
    pub names: Vec<Terminal>,
}

/// `name = expr`
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: Terminal,
    pub expr: Expr,
}

impl Program {
    /// Every injectable identifier in declaration order, duplicates retained.
    pub fn injectable_terms(&self) -> Vec<&Terminal> {
        self.injectables
            .iter()
            .flat_map(|injectable| injectable.names.iter())
            .collect()
    }

    /// The name of every definition in declaration order, duplicates retained.
    pub fn declared_terms(&self) -> Vec<&Terminal> {
        self.definitions.iter().map(|def| &def.name).collect()
    }

    /// Term name to defining expression. A later declaration replaces an earlier one.
    pub fn definitions(&self) -> HashMap<&str, &Expr> {
        self.definitions
            .iter()
            .map(|def| (def.name.text.as_str(), &def.expr))
            .collect()
    }
}
