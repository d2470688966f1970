use std::fmt;

use serde::Serialize;

use crate::ast::Terminal;
use crate::lexer::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// A located finding of [`super::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub location: Location,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn at(token: &Terminal, severity: Severity, message: String) -> Self {
        Self {
            location: token.location,
            severity,
            message,
        }
    }

    pub fn unused_injectable(token: &Terminal) -> Self {
        Self::at(
            token,
            Severity::Warning,
            format!("Injectable '{}' is unused.", token.text),
        )
    }

    pub fn duplicate_injectable(token: &Terminal) -> Self {
        Self::at(
            token,
            Severity::Error,
            format!("Injectable '{}' is declared several times.", token.text),
        )
    }

    pub fn duplicate_term(token: &Terminal) -> Self {
        Self::at(
            token,
            Severity::Error,
            format!("Term '{}' is declared several times.", token.text),
        )
    }

    pub fn circular_definition(token: &Terminal) -> Self {
        Self::at(
            token,
            Severity::Error,
            format!("Term '{}' has a circular definition.", token.text),
        )
    }

    pub fn not_fully_defined(token: &Terminal) -> Self {
        Self::at(
            token,
            Severity::Error,
            format!("Term '{}' is not fully defined.", token.text),
        )
    }

    pub fn not_declared(token: &Terminal) -> Self {
        Self::at(
            token,
            Severity::Error,
            format!("Term '{}' is not declared.", token.text),
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.location, self.severity, self.message)
    }
}
