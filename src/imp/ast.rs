//! Abstract syntax trees for IMP programs.
//!
//! The node kinds form closed sums: the grammar is fixed, so each
//! syntactic category is an exhaustive enum and comparisons are derived
//! structural equality. Integer literals are generic over `T` so the same
//! trees serve both machine-sized and arbitrary-precision evaluation.

use std::ops::{Add, Div, Mul, Sub};

/// An arithmetic expression.
///
/// The [`Display`](std::fmt::Display) implementation produces a
/// lisp-style s-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aexp<T> {
    /// An integer literal.
    Int(T),
    /// A variable name.
    Var(String),
    /// Binary addition.
    Add(Box<Self>, Box<Self>),
    /// Binary left-to-right subtraction.
    Sub(Box<Self>, Box<Self>),
    /// Binary multiplication.
    Mul(Box<Self>, Box<Self>),
    /// Binary left-to-right division.
    Div(Box<Self>, Box<Self>),
}

impl<T> Add for Aexp<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Aexp::Add(Box::new(self), Box::new(rhs))
    }
}

impl<T> Sub for Aexp<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Aexp::Sub(Box::new(self), Box::new(rhs))
    }
}

impl<T> Mul for Aexp<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Aexp::Mul(Box::new(self), Box::new(rhs))
    }
}

impl<T> Div for Aexp<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Aexp::Div(Box::new(self), Box::new(rhs))
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Aexp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Aexp::Int(int) => write!(f, "{int}"),
            Aexp::Var(var) => write!(f, "{var}"),
            Aexp::Add(lhs, rhs) => write!(f, "(+ {lhs} {rhs})"),
            Aexp::Sub(lhs, rhs) => write!(f, "(- {lhs} {rhs})"),
            Aexp::Mul(lhs, rhs) => write!(f, "(* {lhs} {rhs})"),
            Aexp::Div(lhs, rhs) => write!(f, "(/ {lhs} {rhs})"),
        }
    }
}

/// A relational operator comparing two arithmetic expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `=`
    Eq,
    /// `!=`
    Ne,
}

impl std::fmt::Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelOp::Lt => write!(f, "<"),
            RelOp::Le => write!(f, "<="),
            RelOp::Gt => write!(f, ">"),
            RelOp::Ge => write!(f, ">="),
            RelOp::Eq => write!(f, "="),
            RelOp::Ne => write!(f, "!="),
        }
    }
}

/// A boolean expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bexp<T> {
    /// A comparison of two arithmetic expressions.
    Rel(RelOp, Aexp<T>, Aexp<T>),
    /// Logical negation.
    Not(Box<Self>),
    /// Logical conjunction.
    And(Box<Self>, Box<Self>),
    /// Logical disjunction.
    Or(Box<Self>, Box<Self>),
}

impl<T: std::fmt::Display> std::fmt::Display for Bexp<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bexp::Rel(op, lhs, rhs) => write!(f, "({op} {lhs} {rhs})"),
            Bexp::Not(inner) => write!(f, "(not {inner})"),
            Bexp::And(lhs, rhs) => write!(f, "(and {lhs} {rhs})"),
            Bexp::Or(lhs, rhs) => write!(f, "(or {lhs} {rhs})"),
        }
    }
}

/// An IMP statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt<T> {
    /// A variable assignment, `x := aexp`.
    Assign(String, Aexp<T>),
    /// A left-to-right sequence of two statements, `first ; second`.
    Seq(Box<Self>, Box<Self>),
    /// A conditional, `if bexp then stmt [else stmt] end`.
    If {
        /// The branch condition.
        cond: Bexp<T>,
        /// The statement executed when `cond` holds.
        true_case: Box<Self>,
        /// The statement executed otherwise, if any.
        false_case: Option<Box<Self>>,
    },
    /// An iteration, `while bexp do stmt end`.
    While(Bexp<T>, Box<Self>),
}

impl<T: std::fmt::Display> std::fmt::Display for Stmt<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assign(var, expr) => write!(f, "(assign {var} {expr})"),
            Stmt::Seq(first, second) => write!(f, "(seq {first} {second})"),
            Stmt::If {
                cond,
                true_case,
                false_case: Some(false_case),
            } => write!(f, "(if {cond} {true_case} {false_case})"),
            Stmt::If {
                cond,
                true_case,
                false_case: None,
            } => write!(f, "(if {cond} {true_case})"),
            Stmt::While(cond, body) => write!(f, "(while {cond} {body})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_impls_build_trees() {
        let expr = Aexp::Int(2) + Aexp::Int(3) * Aexp::Var("x".to_string());
        assert_eq!(
            expr,
            Aexp::Add(
                Box::new(Aexp::Int(2)),
                Box::new(Aexp::Mul(
                    Box::new(Aexp::Int(3)),
                    Box::new(Aexp::Var("x".to_string())),
                )),
            )
        );
        assert_eq!(expr.to_string(), "(+ 2 (* 3 x))");
    }

    #[test]
    fn distinct_trees_compare_unequal() {
        // Structural equality, not printed-form equality.
        let left: Aexp<i64> = (Aexp::Int(1) + Aexp::Int(2)) + Aexp::Int(3);
        let right: Aexp<i64> = Aexp::Int(1) + (Aexp::Int(2) + Aexp::Int(3));
        assert_ne!(left, right);
    }

    #[test]
    fn statements_display_as_s_expressions() {
        let stmt: Stmt<i64> = Stmt::If {
            cond: Bexp::Rel(RelOp::Lt, Aexp::Var("x".into()), Aexp::Int(1)),
            true_case: Box::new(Stmt::Assign("x".into(), Aexp::Int(1))),
            false_case: None,
        };
        assert_eq!(stmt.to_string(), "(if (< x 1) (assign x 1))");
    }
}
