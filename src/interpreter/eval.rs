//! Bottom-up reduction of expression trees
//!
//! Nothing short-circuits: both operands of `&&`/`||` and all three parts
//! of a conditional are evaluated before the operator or branch is applied,
//! so every term they mention ends up memoized.

use crate::ast::expression::{
    ArithOp0, ArithOp1, Base, CompOp, Expr, Factor, LogicOp, Pred, Sum, UnaryOp, Value,
};

use super::EvalError;
use super::scope::Scope;
use super::value::RValue;

impl Expr {
    pub fn eval(&self, scope: &mut Scope) -> Result<RValue, EvalError> {
        let head = self.head.eval(scope)?;
        self.tail.iter().try_fold(head, |acc, (op, pred)| {
            let rhs = pred.eval(scope)?;
            Ok(op.apply(&acc, &rhs))
        })
    }
}

impl Pred {
    pub fn eval(&self, scope: &mut Scope) -> Result<RValue, EvalError> {
        let lhs = self.value.eval(scope)?;
        match &self.comparison {
            Some((op, rhs)) => {
                let rhs = rhs.eval(scope)?;
                Ok(op.apply(&lhs, &rhs))
            }
            None => Ok(lhs),
        }
    }
}

impl Value {
    pub fn eval(&self, scope: &mut Scope) -> Result<RValue, EvalError> {
        let head = self.head.eval(scope)?;
        self.tail.iter().try_fold(head, |acc, (op, sum)| {
            let rhs = sum.eval(scope)?;
            Ok(op.apply(&acc, &rhs))
        })
    }
}

impl Sum {
    pub fn eval(&self, scope: &mut Scope) -> Result<RValue, EvalError> {
        let head = self.head.eval(scope)?;
        self.tail.iter().try_fold(head, |acc, (op, factor)| {
            let rhs = factor.eval(scope)?;
            Ok(op.apply(&acc, &rhs))
        })
    }
}

impl Factor {
    pub fn eval(&self, scope: &mut Scope) -> Result<RValue, EvalError> {
        let base = self.base.eval(scope)?;
        Ok(match self.unary {
            Some(op) => op.apply(&base),
            None => base,
        })
    }
}

impl Base {
    pub fn eval(&self, scope: &mut Scope) -> Result<RValue, EvalError> {
        match self {
            Base::Number(number) => Ok(RValue::Number(
                number.text.parse().unwrap_or(f64::NAN),
            )),
            Base::Boolean { value, .. } => Ok(RValue::Boolean(*value)),
            Base::Parenthesized(inner) => inner.eval(scope),
            Base::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = condition.eval(scope)?;
                let then_value = then_branch.eval(scope)?;
                let else_value = else_branch.eval(scope)?;
                Ok(if condition.is_truthy() {
                    then_value
                } else {
                    else_value
                })
            }
            Base::Ident(ident) => scope.resolve(&ident.text),
        }
    }
}

impl UnaryOp {
    pub fn apply(self, operand: &RValue) -> RValue {
        match self {
            UnaryOp::Negate => RValue::Number(-operand.to_number()),
            UnaryOp::Not => RValue::Boolean(!operand.is_truthy()),
        }
    }
}

impl ArithOp0 {
    pub fn apply(self, lhs: &RValue, rhs: &RValue) -> RValue {
        let (a, b) = (lhs.to_number(), rhs.to_number());
        RValue::Number(match self {
            ArithOp0::Add => a + b,
            ArithOp0::Sub => a - b,
        })
    }
}

impl ArithOp1 {
    pub fn apply(self, lhs: &RValue, rhs: &RValue) -> RValue {
        let (a, b) = (lhs.to_number(), rhs.to_number());
        RValue::Number(match self {
            ArithOp1::Mul => a * b,
            ArithOp1::Div => a / b,
        })
    }
}

impl LogicOp {
    pub fn apply(self, lhs: &RValue, rhs: &RValue) -> RValue {
        let (a, b) = (lhs.is_truthy(), rhs.is_truthy());
        RValue::Boolean(match self {
            LogicOp::And => a && b,
            LogicOp::Or => a || b,
        })
    }
}

impl CompOp {
    pub fn apply(self, lhs: &RValue, rhs: &RValue) -> RValue {
        use std::cmp::Ordering::{Equal, Greater, Less};

        let ordering = lhs.loose_cmp(rhs);
        RValue::Boolean(match self {
            CompOp::Gt => matches!(ordering, Some(Greater)),
            CompOp::Ge => matches!(ordering, Some(Greater | Equal)),
            CompOp::Lt => matches!(ordering, Some(Less)),
            CompOp::Le => matches!(ordering, Some(Less | Equal)),
            CompOp::Eq => lhs.loose_eq(rhs),
            CompOp::Ne => !lhs.loose_eq(rhs),
        })
    }
}
