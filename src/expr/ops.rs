//! Operator overloads, conversions and the `when` builder

use std::ops::{Add, Div, Mul, Neg, Not, Sub};

use super::{BinaryOp, Expr};
use crate::value::Value;

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::Column(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Column(name)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value)
    }
}

macro_rules! impl_arith {
    (@lit $trait:ident, $method:ident, $op:expr, $t:ty) => {
        impl $trait<$t> for Expr {
            type Output = Expr;
            fn $method(self, rhs: $t) -> Expr {
                Expr::Binary {
                    op: $op,
                    left: Box::new(self),
                    right: Box::new(Expr::Literal(Value::from(rhs))),
                }
            }
        }
    };
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Expr> for Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                Expr::Binary {
                    op: $op,
                    left: Box::new(self),
                    right: Box::new(rhs),
                }
            }
        }

        impl_arith!(@lit $trait, $method, $op, i32);
        impl_arith!(@lit $trait, $method, $op, i64);
        impl_arith!(@lit $trait, $method, $op, f64);
    };
}

impl_arith!(Add, add, BinaryOp::Add);
impl_arith!(Sub, sub, BinaryOp::Subtract);
impl_arith!(Mul, mul, BinaryOp::Multiply);
impl_arith!(Div, div, BinaryOp::Divide);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::Negate(Box::new(self))
    }
}

impl Not for Expr {
    type Output = Expr;
    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

/// Chained `CASE WHEN` under construction
///
/// Converts into an [`Expr`] directly (unmatched rows become null) or through
/// [`CaseWhen::otherwise`].
#[derive(Debug, Clone)]
pub struct CaseWhen {
    branches: Vec<(Expr, Expr)>,
}

impl CaseWhen {
    pub(crate) fn new(condition: Expr, value: Expr) -> Self {
        CaseWhen {
            branches: vec![(condition, value)],
        }
    }

    pub fn when(mut self, condition: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        self.branches.push((condition.into(), value.into()));
        self
    }

    pub fn otherwise(self, value: impl Into<Expr>) -> Expr {
        Expr::CaseWhen {
            branches: self.branches,
            otherwise: Some(Box::new(value.into())),
        }
    }
}

impl From<CaseWhen> for Expr {
    fn from(case: CaseWhen) -> Self {
        Expr::CaseWhen {
            branches: case.branches,
            otherwise: None,
        }
    }
}
