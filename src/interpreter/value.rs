use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lexer::is_number_literal;

/// Runtime value representation
///
/// Strings are opaque: they come from injected values or from identifiers
/// that have neither an override nor a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RValue {
    Number(f64),
    Boolean(bool),
    String(String),
}

impl RValue {
    /// Numeric view used by arithmetic: booleans are 0 or 1, blank text is 0,
    /// numeric text parses, anything else is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            RValue::Number(n) => *n,
            RValue::Boolean(b) => f64::from(u8::from(*b)),
            RValue::String(s) => match s.trim() {
                "" => 0.0,
                text => text.parse().unwrap_or(f64::NAN),
            },
        }
    }

    /// Truthiness used by `&&`, `||`, `!` and conditionals.
    pub fn is_truthy(&self) -> bool {
        match self {
            RValue::Number(n) => *n != 0.0 && !n.is_nan(),
            RValue::Boolean(b) => *b,
            RValue::String(s) => !s.is_empty(),
        }
    }

    /// Same-kind values compare directly, mixed kinds numerically.
    pub fn loose_eq(&self, other: &RValue) -> bool {
        match (self, other) {
            (RValue::Number(a), RValue::Number(b)) => a == b,
            (RValue::Boolean(a), RValue::Boolean(b)) => a == b,
            (RValue::String(a), RValue::String(b)) => a == b,
            _ => self.to_number() == other.to_number(),
        }
    }

    /// Ordering for `<`, `<=`, `>`, `>=`. `None` when either side is NaN.
    pub fn loose_cmp(&self, other: &RValue) -> Option<Ordering> {
        match (self, other) {
            (RValue::String(a), RValue::String(b)) => Some(a.cmp(b)),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }
}

impl fmt::Display for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RValue::Number(n) => write!(f, "{n}"),
            RValue::Boolean(b) => write!(f, "{b}"),
            RValue::String(s) => f.write_str(s),
        }
    }
}

/// Reads a command-line value: `true`/`false`, then a decimal number with an
/// optional leading `-`, else plain text.
impl FromStr for RValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        Ok(match s {
            "true" => RValue::Boolean(true),
            "false" => RValue::Boolean(false),
            _ if is_number_literal(unsigned) => s
                .parse::<f64>()
                .map_or_else(|_| RValue::String(s.to_string()), RValue::Number),
            _ => RValue::String(s.to_string()),
        })
    }
}

impl From<f64> for RValue {
    fn from(n: f64) -> Self {
        RValue::Number(n)
    }
}

impl From<bool> for RValue {
    fn from(b: bool) -> Self {
        RValue::Boolean(b)
    }
}

impl From<&str> for RValue {
    fn from(s: &str) -> Self {
        RValue::String(s.to_string())
    }
}

impl From<String> for RValue {
    fn from(s: String) -> Self {
        RValue::String(s)
    }
}
