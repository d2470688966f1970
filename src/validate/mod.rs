//! # Static validation
//!
//! Checks a parsed program without evaluating it. Every problem is collected
//! into a [`Diagnostic`]; nothing here fails. The result is sorted by
//! location, and an empty result means the program is well-formed.
//!
//! The core of the analysis is a fixed-point closure: starting from the
//! injectable names, a term becomes *fully defined* once every identifier in
//! its definition is fully defined. Terms never reached are reported, with a
//! separate error for the ones that mention their own name.

mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::ast::{Program, Terminal};

/// Validate a program, returning its diagnostics sorted by location.
pub fn validate(program: &Program) -> Vec<Diagnostic> {
    let injectables = program.injectable_terms();
    let declared = program.declared_terms();
    let references = references_by_term(program);
    let fully_defined = fully_defined_terms(&injectables, &references);

    let mut diagnostics = Vec::new();
    diagnostics.extend(unused_injectables(program, &injectables));
    diagnostics.extend(
        duplicates(&injectables)
            .into_iter()
            .map(Diagnostic::duplicate_injectable),
    );
    diagnostics.extend(duplicates(&declared).into_iter().map(Diagnostic::duplicate_term));
    diagnostics.extend(undefined_terms(program, &references, &fully_defined));
    diagnostics.extend(undeclared_references(program, &injectables, &declared));

    diagnostics.sort_by_key(|diagnostic| diagnostic.location);

    debug!(
        diagnostics = diagnostics.len(),
        fully_defined = fully_defined.len(),
        "validated program"
    );
    diagnostics
}

/// Identifiers referenced by each term's effective (last) definition.
fn references_by_term(program: &Program) -> HashMap<&str, Vec<&Terminal>> {
    program
        .definitions()
        .into_iter()
        .map(|(name, expr)| (name, expr.identifiers()))
        .collect()
}

/// Names whose reference closure bottoms out in injectables.
pub fn fully_defined_terms<'a>(
    injectables: &[&'a Terminal],
    references: &HashMap<&'a str, Vec<&'a Terminal>>,
) -> HashSet<&'a str> {
    let mut fully_defined: HashSet<&str> = injectables
        .iter()
        .map(|token| token.text.as_str())
        .collect();

    loop {
        let newly_defined: Vec<&str> = references
            .iter()
            .filter(|(name, _)| !fully_defined.contains(*name))
            .filter(|(_, refs)| {
                refs.iter()
                    .all(|token| fully_defined.contains(token.text.as_str()))
            })
            .map(|(name, _)| *name)
            .collect();

        if newly_defined.is_empty() {
            return fully_defined;
        }
        fully_defined.extend(newly_defined);
    }
}

/// Every token whose text occurs more than once in `tokens`.
fn duplicates<'a>(tokens: &[&'a Terminal]) -> Vec<&'a Terminal> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.text.as_str()).or_default() += 1;
    }

    tokens
        .iter()
        .filter(|token| counts[token.text.as_str()] > 1)
        .copied()
        .collect()
}

fn unused_injectables(program: &Program, injectables: &[&Terminal]) -> Vec<Diagnostic> {
    let referenced: HashSet<&str> = program
        .definitions
        .iter()
        .flat_map(|def| def.expr.identifiers())
        .map(|token| token.text.as_str())
        .collect();

    injectables
        .iter()
        .filter(|token| !referenced.contains(token.text.as_str()))
        .map(|token| Diagnostic::unused_injectable(token))
        .collect()
}

/// Circular and not-fully-defined errors, reported on the effective definition of each term.
fn undefined_terms(
    program: &Program,
    references: &HashMap<&str, Vec<&Terminal>>,
    fully_defined: &HashSet<&str>,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for def in program.definitions.iter().rev() {
        let name = def.name.text.as_str();
        if !seen.insert(name) {
            continue;
        }

        let refs = references.get(name).map(Vec::as_slice).unwrap_or_default();
        let circular = refs.iter().any(|token| token.text == name);
        if circular {
            diagnostics.push(Diagnostic::circular_definition(&def.name));
        }

        if !fully_defined.contains(name) {
            let blocked_elsewhere = refs
                .iter()
                .any(|token| token.text != name && !fully_defined.contains(token.text.as_str()));
            if !circular || blocked_elsewhere {
                diagnostics.push(Diagnostic::not_fully_defined(&def.name));
            }
        }
    }

    diagnostics
}

fn undeclared_references(
    program: &Program,
    injectables: &[&Terminal],
    declared: &[&Terminal],
) -> Vec<Diagnostic> {
    let known: HashSet<&str> = injectables
        .iter()
        .chain(declared)
        .map(|token| token.text.as_str())
        .collect();

    program
        .definitions
        .iter()
        .flat_map(|def| def.expr.identifiers())
        .filter(|token| !known.contains(token.text.as_str()))
        .map(Diagnostic::not_declared)
        .collect()
}
