use super::super::exception::UnitError;
use super::super::RuntimeConfig;
use super::Value;

use crate::print::ansi::{OPERATOR, PUNCT, RESET};
use crate::print::PrettyPrint;

use std::fmt;

// MARK: BinOp

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Mul)
    }

    /// Whether the operator scales a quantity rather than combining two.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, BinOp::Mul | BinOp::Div)
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// MARK: Expression

/// A combination of two operands whose units could not be reconciled.
///
/// Expressions are a terminal record for display; they are never evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    op: BinOp,
    lhs: Box<Term>,
    rhs: Box<Term>,
}

impl Expression {
    pub(crate) fn new(op: BinOp, lhs: impl Into<Term>, rhs: impl Into<Term>) -> Self {
        Self {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn op(&self) -> BinOp {
        self.op
    }

    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    pub fn rhs(&self) -> &Term {
        &self.rhs
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op, self.rhs)
    }
}

impl PrettyPrint<RuntimeConfig> for Expression {
    fn pretty_print<Output: std::io::Write>(
        &self,
        out: &mut Output,
        config: &RuntimeConfig,
        level: usize,
    ) -> std::io::Result<()> {
        write!(out, "{PUNCT}({RESET}")?;
        self.lhs.pretty_print(out, config, level + 1)?;
        write!(out, " {OPERATOR}{}{RESET} ", self.op)?;
        self.rhs.pretty_print(out, config, level + 1)?;
        write!(out, "{PUNCT}){RESET}")
    }
}

// MARK: Term

/// The result of an arithmetic operation: a concrete value or symbolic residue.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Value(Value),
    Expr(Expression),
}

impl Term {
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Term::Expr(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Term::Value(v) => Some(v),
            Term::Expr(_) => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expression> {
        match self {
            Term::Value(_) => None,
            Term::Expr(e) => Some(e),
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Term::Value(v) => Some(v),
            Term::Expr(_) => None,
        }
    }
}

impl From<Value> for Term {
    fn from(v: Value) -> Self {
        Term::Value(v)
    }
}

impl From<Expression> for Term {
    fn from(e: Expression) -> Self {
        Term::Expr(e)
    }
}

impl From<f64> for Term {
    fn from(v: f64) -> Self {
        Term::Value(Value::bare(v))
    }
}

impl TryFrom<Term> for Value {
    type Error = UnitError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Value(v) => Ok(v),
            Term::Expr(_) => Err(UnitError::UnsupportedOperand("symbolic expression")),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Value(v) => v.fmt(f),
            Term::Expr(e) => e.fmt(f),
        }
    }
}

impl PrettyPrint<RuntimeConfig> for Term {
    fn pretty_print<Output: std::io::Write>(
        &self,
        out: &mut Output,
        config: &RuntimeConfig,
        level: usize,
    ) -> std::io::Result<()> {
        match self {
            Term::Value(v) => v.pretty_print(out, config, level),
            Term::Expr(e) => e.pretty_print(out, config, level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{cm, deg_c, mil};
    use super::*;
    use crate::print::PrettyString;

    #[test]
    fn renders_parenthesized() {
        let expr = Expression::new(BinOp::Add, mil(2.0), deg_c(3.0));
        assert_eq!(expr.to_string(), "(2 mil + 3 degC)");
    }

    #[test]
    fn renders_nested() {
        let inner = Expression::new(BinOp::Mul, cm(2.0), cm(3.0));
        let outer = Expression::new(BinOp::Sub, inner, Expression::new(BinOp::Div, mil(1.0), 4.0));
        assert_eq!(outer.to_string(), "((2 cm * 3 cm) - (1 mil / 4))");
        assert_eq!(
            outer.plain_string(&RuntimeConfig::default()),
            outer.to_string()
        );
    }

    #[test]
    fn keeps_operands_unconverted() {
        let expr = Expression::new(BinOp::Sub, cm(1.0), deg_c(2.0));
        assert_eq!(expr.op(), BinOp::Sub);
        assert_eq!(expr.lhs().as_value(), Some(&cm(1.0)));
        assert_eq!(expr.rhs().as_value(), Some(&deg_c(2.0)));
    }

    #[test]
    fn symbolic_term_is_not_a_value() {
        let term = Term::from(Expression::new(BinOp::Add, cm(1.0), deg_c(1.0)));
        assert!(term.is_symbolic());
        assert_eq!(
            Value::try_from(term),
            Err(UnitError::UnsupportedOperand("symbolic expression"))
        );
        assert_eq!(Value::try_from(Term::from(2.0)), Ok(Value::bare(2.0)));
    }

    #[test]
    fn op_properties() {
        assert!(BinOp::Add.is_commutative());
        assert!(!BinOp::Sub.is_commutative());
        assert!(BinOp::Div.is_multiplicative());
        assert_eq!(BinOp::Sub.apply(5.0, 2.0), 3.0);
        assert_eq!(BinOp::Div.apply(1.0, 4.0), 0.25);
    }
}
