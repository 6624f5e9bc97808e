//! A tree-walk interpreter for IMP programs.
//!
//! The interpreter is generic over the integer type `T`, so the same code
//! runs with machine integers or with [`num_bigint::BigInt`] for
//! arbitrary-precision execution.

use std::collections::HashMap;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;
use thiserror::Error;

use super::ast::{Aexp, Bexp, RelOp, Stmt};

/// The error type produced while evaluating a program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable was read before any assignment or initial binding.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
    /// The right-hand side of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// The variable bindings of a running program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<T>(HashMap<String, T>);

impl<T> Default for State<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> State<T> {
    /// Constructs a state with no bindings.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns the value bound to `name`, or `None` if it is unbound.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: String, value: T) {
        self.0.insert(name, value);
    }
}

impl<T> From<HashMap<String, T>> for State<T> {
    fn from(bindings: HashMap<String, T>) -> Self {
        Self(bindings)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.0.keys().collect();
        names.sort_unstable();
        write!(f, "{{")?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {}", self.0[*name])?;
        }
        write!(f, "}}")
    }
}

/// A tree-walk interpreter: executes a program by walking its tree,
/// evaluating expressions, and updating internal state.
#[derive(Debug, Clone, Default)]
pub struct Interpreter<T> {
    /// The variable bindings accumulated so far.
    state: State<T>,
}

impl<T> Interpreter<T>
where
    T: Clone
        + Ord
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>,
{
    /// Constructs an interpreter with no bindings.
    pub fn new() -> Self {
        Self::from_initial_state(State::new())
    }

    /// Constructs an interpreter over the given initial bindings.
    pub fn from_initial_state(state: State<T>) -> Self {
        Self { state }
    }

    /// Executes `program` to completion, consuming the interpreter and
    /// returning the final state.
    pub fn run(mut self, program: &Stmt<T>) -> Result<State<T>, EvalError> {
        self.exec(program)?;
        Ok(self.state)
    }

    /// Executes a single statement against the current state.
    fn exec(&mut self, stmt: &Stmt<T>) -> Result<(), EvalError> {
        match stmt {
            Stmt::Assign(name, expr) => {
                let value = self.eval_aexp(expr)?;
                self.state.set(name.clone(), value);
            }
            Stmt::Seq(first, second) => {
                self.exec(first)?;
                self.exec(second)?;
            }
            Stmt::If {
                cond,
                true_case,
                false_case,
            } => {
                if self.eval_bexp(cond)? {
                    self.exec(true_case)?;
                } else if let Some(false_case) = false_case {
                    self.exec(false_case)?;
                }
            }
            Stmt::While(cond, body) => {
                while self.eval_bexp(cond)? {
                    self.exec(body)?;
                }
            }
        }
        Ok(())
    }

    /// Evaluates an arithmetic expression against the current state.
    fn eval_aexp(&self, expr: &Aexp<T>) -> Result<T, EvalError> {
        match expr {
            Aexp::Int(int) => Ok(int.clone()),
            Aexp::Var(name) => self
                .state
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Aexp::Add(lhs, rhs) => Ok(self.eval_aexp(lhs)? + self.eval_aexp(rhs)?),
            Aexp::Sub(lhs, rhs) => Ok(self.eval_aexp(lhs)? - self.eval_aexp(rhs)?),
            Aexp::Mul(lhs, rhs) => Ok(self.eval_aexp(lhs)? * self.eval_aexp(rhs)?),
            Aexp::Div(lhs, rhs) => {
                let divisor = self.eval_aexp(rhs)?;
                if divisor.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(self.eval_aexp(lhs)? / divisor)
            }
        }
    }

    /// Evaluates a boolean expression against the current state.
    fn eval_bexp(&self, expr: &Bexp<T>) -> Result<bool, EvalError> {
        match expr {
            Bexp::Rel(op, lhs, rhs) => {
                let lhs = self.eval_aexp(lhs)?;
                let rhs = self.eval_aexp(rhs)?;
                Ok(match op {
                    RelOp::Lt => lhs < rhs,
                    RelOp::Le => lhs <= rhs,
                    RelOp::Gt => lhs > rhs,
                    RelOp::Ge => lhs >= rhs,
                    RelOp::Eq => lhs == rhs,
                    RelOp::Ne => lhs != rhs,
                })
            }
            Bexp::Not(inner) => Ok(!self.eval_bexp(inner)?),
            Bexp::And(lhs, rhs) => Ok(self.eval_bexp(lhs)? && self.eval_bexp(rhs)?),
            Bexp::Or(lhs, rhs) => Ok(self.eval_bexp(lhs)? || self.eval_bexp(rhs)?),
        }
    }
}
