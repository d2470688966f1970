//! Pretty printer for formula documents
//!
//! Prints injectable groups first, then one definition per line, with single
//! spaces around binary operators. The output parses back to the same tree
//! apart from token locations.

use std::fmt::{self, Display};

use crate::ast::expression::{Base, Expr, Factor, Pred, Sum, Value};
use crate::ast::{Definition, Injectable, Program};

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for injectable in &self.injectables {
            writeln!(f, "{injectable}")?;
        }
        for def in &self.definitions {
            writeln!(f, "{def}")?;
        }
        Ok(())
    }
}

impl Display for Injectable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names.iter().map(|name| name.text.as_str()).collect();
        write!(f, "${}: {}", self.group.text, names.join(", "))
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name.text, self.expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (op, pred) in &self.tail {
            write!(f, " {} {pred}", op.symbol())?;
        }
        Ok(())
    }
}

impl Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some((op, rhs)) = &self.comparison {
            write!(f, " {} {rhs}", op.symbol())?;
        }
        Ok(())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (op, sum) in &self.tail {
            write!(f, " {} {sum}", op.symbol())?;
        }
        Ok(())
    }
}

impl Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (op, factor) in &self.tail {
            write!(f, " {} {factor}", op.symbol())?;
        }
        Ok(())
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = self.unary {
            f.write_str(op.symbol())?;
        }
        write!(f, "{}", self.base)
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Number(number) => f.write_str(&number.text),
            Base::Boolean { value, .. } => write!(f, "{value}"),
            Base::Parenthesized(inner) => write!(f, "({inner})"),
            Base::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "if {condition} then {then_branch} else {else_branch} end"),
            Base::Ident(ident) => f.write_str(&ident.text),
        }
    }
}
