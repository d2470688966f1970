//! Expression parsers, lowest precedence first
//!
//! Every binary level is left-associative through repetition; only the
//! comparison in `pred` recurses to the right.

use crate::ast::expression::{Base, Expr, Factor, Pred, Sum, Value};

use crate::parser::combinators::{BoxedParser, expect, lazy, literal, many, optional};

use super::literal::{
    arith_op_0, arith_op_1, boolean, comp_op, ident, logic_op, number, unary_op,
};

/// expr := pred { logic_op pred! }
pub fn expr() -> BoxedParser<Expr> {
    (pred() + many(logic_op() + expect("a predicate after the logic operator", pred())))
        >> |(head, tail)| Expr { head, tail }
}

/// pred := value [ comp_op pred! ]
pub fn pred() -> BoxedParser<Pred> {
    let comparison =
        comp_op() + expect("a predicate after the comparison operator", lazy(pred));

    (value() + optional(comparison))
        >> |(value, comparison)| Pred {
            value,
            comparison: comparison.map(|(op, rhs)| (op, Box::new(rhs))),
        }
}

/// value := sum { arith_op_0 sum! }
pub fn value() -> BoxedParser<Value> {
    (sum() + many(arith_op_0() + expect("a sumator after the operator", sum())))
        >> |(head, tail)| Value { head, tail }
}

/// sum := factor { arith_op_1 factor! }
pub fn sum() -> BoxedParser<Sum> {
    (factor() + many(arith_op_1() + expect("a factor after the operator", factor())))
        >> |(head, tail)| Sum { head, tail }
}

/// factor := [ unary_op ] base
pub fn factor() -> BoxedParser<Factor> {
    (optional(unary_op()) + base()) >> |(unary, base)| Factor { unary, base }
}

/// parenthesized := "(" expr! ")"!
fn parenthesized() -> BoxedParser<Base> {
    (literal("(") * expect("a value between the parentheses", lazy(expr))
        - expect("literal \")\"", literal(")")))
        >> |inner| Base::Parenthesized(Box::new(inner))
}

/// conditional := "if" expr! "then" expr! "else" expr! "end"!
fn conditional() -> BoxedParser<Base> {
    (literal("if") * expect("a condition", lazy(expr)) - expect("\"then\"", literal("then"))
        + expect("an expression after \"then\"", lazy(expr))
        - expect("\"else\"", literal("else"))
        + expect("an expression after \"else\"", lazy(expr))
        - expect("\"end\"", literal("end")))
        >> |((condition, then_branch), else_branch)| Base::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
}

/// base := num | "true" | "false" | parenthesized | conditional | id
pub fn base() -> BoxedParser<Base> {
    (number() >> Base::Number) | boolean() | parenthesized() | conditional() | (ident() >> Base::Ident)
}
