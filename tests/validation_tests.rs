use pretty_assertions::assert_eq;
use pricelang::lexer::Location;
use pricelang::parser::parse_source;
use pricelang::validate::{Diagnostic, Severity, fully_defined_terms, validate};

fn diagnostics(input: &str) -> Vec<Diagnostic> {
    let program = parse_source(input).unwrap_or_else(|err| panic!("parsing failed: {err}"));
    validate(&program)
}

fn rendered(input: &str) -> Vec<String> {
    diagnostics(input).iter().map(ToString::to_string).collect()
}

#[test]
fn validate_well_formed_program() {
    let input = "$inputs: price, qty\nsubtotal = price * qty\ntotal = subtotal + shipping\nshipping = 5";
    assert!(diagnostics(input).is_empty());
}

#[test]
fn validate_empty_program() {
    assert!(diagnostics("").is_empty());
}

#[test]
fn validate_reports_in_location_order() {
    let input = "$k: a, b x=a+b-y y=c*(2-if z then y else 2 end) z=1";
    assert_eq!(
        rendered(input),
        vec![
            "1:9 error: Term 'x' is not fully defined.",
            "1:17 error: Term 'y' has a circular definition.",
            "1:17 error: Term 'y' is not fully defined.",
            "1:19 error: Term 'c' is not declared.",
        ]
    );
}

#[test]
fn validate_unused_injectable_is_a_warning() {
    let found = diagnostics("$in: a, b\nx = a");
    assert_eq!(
        found,
        vec![Diagnostic {
            location: Location::new(1, 8),
            severity: Severity::Warning,
            message: "Injectable 'b' is unused.".to_string(),
        }]
    );
    assert!(!found[0].is_error());
}

#[test]
fn validate_duplicate_injectables() {
    assert_eq!(
        rendered("$g: a\n$h: a\nx = a"),
        vec![
            "1:4 error: Injectable 'a' is declared several times.",
            "2:4 error: Injectable 'a' is declared several times.",
        ]
    );
}

#[test]
fn validate_duplicate_terms() {
    assert_eq!(
        rendered("x = 1\ny = x\nx = 2"),
        vec![
            "1:0 error: Term 'x' is declared several times.",
            "3:0 error: Term 'x' is declared several times.",
        ]
    );
}

#[test]
fn validate_only_last_duplicate_definition_counts() {
    // The first `x` would be fine; the effective one is not.
    assert_eq!(
        rendered("x = 1\nx = q"),
        vec![
            "1:0 error: Term 'x' is declared several times.",
            "2:0 error: Term 'x' is declared several times.",
            "2:0 error: Term 'x' is not fully defined.",
            "2:4 error: Term 'q' is not declared.",
        ]
    );
}

#[test]
fn validate_plain_self_reference_is_only_circular() {
    assert_eq!(
        rendered("total = total + 1"),
        vec!["1:0 error: Term 'total' has a circular definition."]
    );
}

#[test]
fn validate_mutual_recursion_is_not_fully_defined() {
    assert_eq!(
        rendered("a = b\nb = a"),
        vec![
            "1:0 error: Term 'a' is not fully defined.",
            "2:0 error: Term 'b' is not fully defined.",
        ]
    );
}

#[test]
fn validate_reports_every_undeclared_reference() {
    assert_eq!(
        rendered("x = y + y"),
        vec![
            "1:0 error: Term 'x' is not fully defined.",
            "1:4 error: Term 'y' is not declared.",
            "1:8 error: Term 'y' is not declared.",
        ]
    );
}

#[test]
fn validate_forward_references_are_allowed() {
    assert!(diagnostics("total = net * 2\nnet = 10").is_empty());
}

#[test]
fn fully_defined_closure_reaches_a_fixed_point() {
    let program = parse_source("$in: a\nd = c\nc = b + a\nb = a\ne = f").unwrap();
    let references = program
        .definitions()
        .into_iter()
        .map(|(name, expr)| (name, expr.identifiers()))
        .collect();

    let mut defined: Vec<&str> = fully_defined_terms(&program.injectable_terms(), &references)
        .into_iter()
        .collect();
    defined.sort();
    assert_eq!(defined, vec!["a", "b", "c", "d"]);
}
