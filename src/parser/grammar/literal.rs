//! Terminal and operator parsers for the formula language

use crate::ast::Terminal;
use crate::ast::expression::{ArithOp0, ArithOp1, Base, CompOp, LogicOp, UnaryOp};
use crate::lexer::TokenKind;

use crate::parser::combinators::{BoxedParser, literal, token};

/// Parse an identifier
pub fn ident() -> BoxedParser<Terminal> {
    token(TokenKind::Id)
}

/// Parse a number literal
pub fn number() -> BoxedParser<Terminal> {
    token(TokenKind::Num)
}

/// boolean := "true" | "false"
pub fn boolean() -> BoxedParser<Base> {
    let truthy = literal("true")
        >> |t: Terminal| Base::Boolean {
            value: true,
            location: t.location,
        };
    let falsy = literal("false")
        >> |t: Terminal| Base::Boolean {
            value: false,
            location: t.location,
        };
    truthy | falsy
}

/// unary_op := "!" | "-"
pub fn unary_op() -> BoxedParser<UnaryOp> {
    (literal("!") >> |_| UnaryOp::Not) | (literal("-") >> |_| UnaryOp::Negate)
}

/// arith_op_0 := "+" | "-"
pub fn arith_op_0() -> BoxedParser<ArithOp0> {
    (literal("+") >> |_| ArithOp0::Add) | (literal("-") >> |_| ArithOp0::Sub)
}

/// arith_op_1 := "*" | "/"
pub fn arith_op_1() -> BoxedParser<ArithOp1> {
    (literal("*") >> |_| ArithOp1::Mul) | (literal("/") >> |_| ArithOp1::Div)
}

/// logic_op := "&&" | "||"
pub fn logic_op() -> BoxedParser<LogicOp> {
    (literal("&&") >> |_| LogicOp::And) | (literal("||") >> |_| LogicOp::Or)
}

/// comp_op := ">" | ">=" | "<" | "<=" | "==" | "!="
pub fn comp_op() -> BoxedParser<CompOp> {
    (literal(">") >> |_| CompOp::Gt)
        | (literal(">=") >> |_| CompOp::Ge)
        | (literal("<") >> |_| CompOp::Lt)
        | (literal("<=") >> |_| CompOp::Le)
        | (literal("==") >> |_| CompOp::Eq)
        | (literal("!=") >> |_| CompOp::Ne)
}
