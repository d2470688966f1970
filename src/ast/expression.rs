//! Expression nodes, one type per grammar rule.
//!
//! Binary chains keep their first operand in `head` and every following
//! `(operator, operand)` pair in `tail`, in source order, so evaluation is a
//! left fold. Comparisons are the exception: `Pred` nests to the right.

use crate::lexer::Location;

use super::Terminal;

/// `expr := pred { logic_op pred }`
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub head: Pred,
    pub tail: Vec<(LogicOp, Pred)>,
}

/// `pred := value [ comp_op pred ]`
#[derive(Debug, Clone, PartialEq)]
pub struct Pred {
    pub value: Value,
    pub comparison: Option<(CompOp, Box<Pred>)>,
}

/// `value := sum { arith_op_0 sum }`
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub head: Sum,
    pub tail: Vec<(ArithOp0, Sum)>,
}

/// `sum := factor { arith_op_1 factor }`
#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    pub head: Factor,
    pub tail: Vec<(ArithOp1, Factor)>,
}

/// `factor := [ unary_op ] base`
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub unary: Option<UnaryOp>,
    pub base: Base,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    Number(Terminal),
    Boolean { value: bool, location: Location },
    Parenthesized(Box<Expr>),
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Ident(Terminal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp0 {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp1 {
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        }
    }
}

impl ArithOp0 {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp0::Add => "+",
            ArithOp0::Sub => "-",
        }
    }
}

impl ArithOp1 {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp1::Mul => "*",
            ArithOp1::Div => "/",
        }
    }
}

impl LogicOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicOp::And => "&&",
            LogicOp::Or => "||",
        }
    }
}

impl CompOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompOp::Gt => ">",
            CompOp::Ge => ">=",
            CompOp::Lt => "<",
            CompOp::Le => "<=",
            CompOp::Eq => "==",
            CompOp::Ne => "!=",
        }
    }
}

impl Expr {
    /// Every identifier token anywhere in this subtree, in source order.
    pub fn identifiers(&self) -> Vec<&Terminal> {
        let mut found = Vec::new();
        self.collect_identifiers(&mut found);
        found
    }

    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a Terminal>) {
        self.head.collect_identifiers(found);
        for (_, pred) in &self.tail {
            pred.collect_identifiers(found);
        }
    }
}

impl Pred {
    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a Terminal>) {
        self.value.collect_identifiers(found);
        if let Some((_, rhs)) = &self.comparison {
            rhs.collect_identifiers(found);
        }
    }
}

impl Value {
    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a Terminal>) {
        self.head.collect_identifiers(found);
        for (_, sum) in &self.tail {
            sum.collect_identifiers(found);
        }
    }
}

impl Sum {
    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a Terminal>) {
        self.head.collect_identifiers(found);
        for (_, factor) in &self.tail {
            factor.collect_identifiers(found);
        }
    }
}

impl Factor {
    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a Terminal>) {
        self.base.collect_identifiers(found);
    }
}

impl Base {
    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a Terminal>) {
        match self {
            Base::Number(_) | Base::Boolean { .. } => {}
            Base::Parenthesized(expr) => expr.collect_identifiers(found),
            Base::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                condition.collect_identifiers(found);
                then_branch.collect_identifiers(found);
                else_branch.collect_identifiers(found);
            }
            Base::Ident(ident) => found.push(ident),
        }
    }
}
