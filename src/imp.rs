//! IMP: the demo language built on the combinator engine.
//!
//! IMP is the classic teaching imperative language — assignments,
//! conditionals, `while` loops, and arithmetic/boolean expressions over
//! integers. Everything here is ordinary client code: the token table in
//! [`tokens`], the grammar wiring in [`grammar`], and the tree-walk
//! evaluator in [`interpreter`] consume only the public surface of
//! [`crate::lexer`] and [`crate::combinator`].
//!
//! ```
//! use combi::imp::{self, interpreter::Interpreter};
//!
//! let program = imp::parse_program::<i64>("a := 1 + 2 * 3").unwrap();
//! let state = Interpreter::new().run(&program).unwrap();
//! assert_eq!(state.get("a"), Some(&7));
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::combinator::Parser;
use crate::lexer::LexError;

use self::ast::Stmt;
use self::interpreter::EvalError;

pub mod ast;
pub mod grammar;
pub mod interpreter;
pub mod tokens;

/// The error type produced when lexing, parsing, or running an IMP
/// program.
#[derive(Debug, Error)]
pub enum ImpError {
    /// The source text contains a character no lexer rule accepts.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence does not match the grammar (or leaves trailing
    /// tokens). The combinators carry no diagnostic payload, so this is
    /// all there is to report.
    #[error("program does not match the IMP grammar")]
    Parse,
    /// The program failed during evaluation.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Lexes and parses `source` into an IMP syntax tree.
///
/// This builds the lexer and grammar afresh on every call, which is fine
/// for one-shot use; clients parsing many programs should hold onto
/// [`tokens::lexer`] and [`grammar::program`] themselves and reuse them.
pub fn parse_program<T>(source: &str) -> Result<Stmt<T>, ImpError>
where
    T: FromStr + 'static,
{
    let tokens = tokens::lexer()?.lex(source)?;
    let parsed = grammar::program::<T>()
        .parse(&tokens, 0)
        .ok_or(ImpError::Parse)?;
    Ok(parsed.value)
}
