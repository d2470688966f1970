use pretty_assertions::assert_eq;
use pricelang::ast::Program;
use pricelang::ast::expression::{ArithOp0, ArithOp1, Base, CompOp, Expr, LogicOp, UnaryOp};
use pricelang::lexer::{Location, tokenize};
use pricelang::parser::{ParseError, parse, parse_source};

fn parse_program(input: &str) -> Program {
    parse_source(input).unwrap_or_else(|err| panic!("parsing failed: {err}"))
}

fn parse_error(input: &str) -> String {
    match parse_source(input) {
        Ok(program) => panic!("expected a parse error, got {program:?}"),
        Err(err) => err.to_string(),
    }
}

fn only_expr(program: &Program) -> &Expr {
    assert_eq!(program.definitions.len(), 1);
    &program.definitions[0].expr
}

fn number_text(base: &Base) -> &str {
    match base {
        Base::Number(number) => &number.text,
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn parse_empty_program() {
    let program = parse_program("");
    assert!(program.injectables.is_empty());
    assert!(program.definitions.is_empty());
}

#[test]
fn parse_injectables_and_definitions() {
    let program = parse_program("$inputs: a, b\n$flags: premium\ntotal = a + b\nfee = 2");

    assert_eq!(program.injectables.len(), 2);
    assert_eq!(program.injectables[0].group.text, "inputs");
    let names: Vec<&str> = program
        .injectable_terms()
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "premium"]);

    let declared: Vec<&str> = program
        .declared_terms()
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(declared, vec!["total", "fee"]);
    assert_eq!(program.definitions[1].name.location, Location::new(4, 0));
}

#[test]
fn parse_multiplication_binds_tighter_than_addition() {
    let program = parse_program("a = 1 + 2 * 3");
    let value = &only_expr(&program).head.value;

    assert_eq!(number_text(&value.head.head.base), "1");
    assert_eq!(value.tail.len(), 1);

    let (op, rhs) = &value.tail[0];
    assert_eq!(*op, ArithOp0::Add);
    assert_eq!(number_text(&rhs.head.base), "2");
    assert_eq!(rhs.tail.len(), 1);
    assert_eq!(rhs.tail[0].0, ArithOp1::Mul);
    assert_eq!(number_text(&rhs.tail[0].1.base), "3");
}

#[test]
fn parse_binary_chains_keep_source_order() {
    let program = parse_program("a = 8 - 2 - 1");
    let value = &only_expr(&program).head.value;

    let ops: Vec<ArithOp0> = value.tail.iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![ArithOp0::Sub, ArithOp0::Sub]);
    assert_eq!(number_text(&value.tail[1].1.head.base), "1");
}

#[test]
fn parse_comparisons_nest_to_the_right() {
    let program = parse_program("a = 1 < 2 == true");
    let pred = &only_expr(&program).head;

    let Some((op, rhs)) = &pred.comparison else {
        panic!("expected a comparison");
    };
    assert_eq!(*op, CompOp::Lt);
    assert_eq!(number_text(&rhs.value.head.head.base), "2");

    let Some((op, rhs)) = &rhs.comparison else {
        panic!("expected a nested comparison");
    };
    assert_eq!(*op, CompOp::Eq);
    assert!(matches!(
        rhs.value.head.head.base,
        Base::Boolean { value: true, .. }
    ));
}

#[test]
fn parse_logic_operators() {
    let program = parse_program("a = x > 1 && y || !z");
    let expr = only_expr(&program);

    let ops: Vec<LogicOp> = expr.tail.iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![LogicOp::And, LogicOp::Or]);
    assert_eq!(expr.tail[1].1.value.head.head.unary, Some(UnaryOp::Not));
}

#[test]
fn parse_unary_minus() {
    let program = parse_program("a = -b * 2");
    let factor = &only_expr(&program).head.value.head.head;
    assert_eq!(factor.unary, Some(UnaryOp::Negate));
    assert!(matches!(&factor.base, Base::Ident(id) if id.text == "b"));
}

#[test]
fn parse_conditional() {
    let program = parse_program("a = if x > 1 then 2 else (3) end");
    let base = &only_expr(&program).head.value.head.head.base;

    let Base::Conditional {
        condition,
        then_branch,
        else_branch,
    } = base
    else {
        panic!("expected a conditional, got {base:?}");
    };
    assert!(condition.head.comparison.is_some());
    assert_eq!(number_text(&then_branch.head.value.head.head.base), "2");
    assert!(matches!(
        else_branch.head.value.head.head.base,
        Base::Parenthesized(_)
    ));
}

#[test]
fn parse_booleans_before_identifiers() {
    let program = parse_program("a = true\nb = truthy");
    assert!(matches!(
        program.definitions[0].expr.head.value.head.head.base,
        Base::Boolean { value: true, .. }
    ));
    assert!(matches!(
        &program.definitions[1].expr.head.value.head.head.base,
        Base::Ident(id) if id.text == "truthy"
    ));
}

#[test]
fn parse_collects_identifiers_in_source_order() {
    let program = parse_program("x = a + if b then c else a end * (d)");
    let names: Vec<&str> = only_expr(&program)
        .identifiers()
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "a", "d"]);
}

#[test]
fn parse_is_deterministic() {
    let input = "$k: a, b\nx = a + b - y\ny = c * (2 - if z then y else 2 end)\nz = 1";
    assert_eq!(parse_program(input), parse_program(input));
}

#[test]
fn parse_missing_factor_after_operator() {
    assert_eq!(
        parse_error("a = 1 * + 2 "),
        "Expected a factor after the operator. '+' found instead. At 1:8."
    );
}

#[test]
fn parse_missing_sumator_at_end_of_input() {
    assert_eq!(
        parse_error("a = 1 +"),
        "Expected a sumator after the operator. 'End of input' found instead. At end of input."
    );
}

#[test]
fn parse_missing_expression_after_equals() {
    assert_eq!(
        parse_error("a = "),
        "Expected an expression after the \"=\" symbol. 'End of input' found instead. At end of input."
    );
}

#[test]
fn parse_missing_closing_parenthesis() {
    assert_eq!(
        parse_error("a = (1 + 2"),
        "Expected literal \")\". 'End of input' found instead. At end of input."
    );
}

#[test]
fn parse_empty_parentheses() {
    assert_eq!(
        parse_error("a = ()"),
        "Expected a value between the parentheses. ')' found instead. At 1:5."
    );
}

#[test]
fn parse_conditional_without_else() {
    assert_eq!(
        parse_error("a = if x then 1 end"),
        "Expected \"else\". 'end' found instead. At 1:16."
    );
}

#[test]
fn parse_conditional_without_end() {
    assert_eq!(
        parse_error("a = if x then 1 else 2"),
        "Expected \"end\". 'End of input' found instead. At end of input."
    );
}

#[test]
fn parse_missing_predicates() {
    assert_eq!(
        parse_error("a = 1 &&"),
        "Expected a predicate after the logic operator. 'End of input' found instead. At end of input."
    );
    assert_eq!(
        parse_error("a = 1 <= )"),
        "Expected a predicate after the comparison operator. ')' found instead. At 1:9."
    );
}

#[test]
fn parse_trailing_input() {
    assert_eq!(
        parse_error("a = 1 )"),
        "Unexpected token symbol ()). Expected end of input. At 1:6."
    );
}

#[test]
fn parse_definition_without_equals_is_trailing_input() {
    assert_eq!(
        parse_error("a = 1\nb 2"),
        "Unexpected token id (b). Expected end of input. At 2:0."
    );
}

#[test]
fn parse_incomplete_injectable_is_trailing_input() {
    assert_eq!(
        parse_error("$g: , a\nb = 1"),
        "Unexpected token symbol ($). Expected end of input. At 1:0."
    );
}

#[test]
fn parse_returns_structured_errors() {
    let tokens = tokenize("a = 1 * )").unwrap();
    let err = parse(tokens).unwrap_err();
    let ParseError::Expected { description, found } = err else {
        panic!("expected an Expected error, got {err:?}");
    };
    assert_eq!(description, "a factor after the operator");
    assert_eq!(found.map(|t| t.location), Some(Location::new(1, 8)));
}
