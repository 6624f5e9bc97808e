//! The IMP grammar, wired together from the combinator engine's public
//! surface.
//!
//! # Grammar
//! ```raw
//! program   ::= stmt_list
//! stmt_list ::= stmt (`;` stmt)*                 -- left fold via Chain
//! stmt      ::= assign | if | while
//! assign    ::= ID `:=` aexp
//! if        ::= `if` bexp `then` stmt_list [`else` stmt_list] `end`
//! while     ::= `while` bexp `do` stmt_list `end`
//!
//! bexp      ::= bexp_term ((`and` | `or`) bexp_term)*   -- and binds tighter
//! bexp_term ::= `not` bexp_term | aexp relop aexp | `(` bexp `)`
//! relop     ::= `<` | `<=` | `>` | `>=` | `=` | `!=`
//!
//! aexp      ::= aexp_term ((`*` | `/` | `+` | `-`) aexp_term)*  -- by level
//! aexp_term ::= NUMBER | ID | `(` aexp `)`
//! ```
//!
//! Every rule function builds a fresh parser tree; mutual references
//! (statement lists inside `if`/`while` bodies, parenthesized expressions)
//! go through [`Lazy`] so construction terminates. A grammar is built once
//! via [`program`] and reused across parses.

use std::marker::PhantomData;
use std::str::FromStr;

use crate::combinator::{
    any_operator, precedence, BinaryOp, Lazy, Parsed, Parser, ParserExt, Reserved, SharedParser,
    Tag,
};
use crate::lexer::Token;

use super::ast::{Aexp, Bexp, RelOp, Stmt};
use super::tokens::TokenTag;

/// The relational operators, in the order the grammar tries them.
const REL_OPS: &[&str] = &["<", "<=", ">", ">=", "=", "!="];

/// Matches the reserved word or symbol `name`.
pub fn keyword(name: &str) -> SharedParser<TokenTag, String> {
    Reserved::new(name, TokenTag::Reserved).shared()
}

/// Matches any identifier, producing its name.
pub fn identifier() -> SharedParser<TokenTag, String> {
    Tag::new(TokenTag::Id).shared()
}

/// A leaf parser for integer literals that rejects tokens whose digits do
/// not fit in `T` — an out-of-range literal is a parse failure, not a
/// panic.
#[derive(Debug, Clone, Default)]
struct NumberLiteral<T> {
    /// Binds the literal type without storing a value.
    marker: PhantomData<T>,
}

impl<T> NumberLiteral<T> {
    /// Constructs the literal parser.
    fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: FromStr> Parser<TokenTag> for NumberLiteral<T> {
    type Output = T;

    fn parse(&self, tokens: &[Token<TokenTag>], pos: usize) -> Option<Parsed<T>> {
        let token = tokens.get(pos)?;
        if token.tag != TokenTag::Number {
            return None;
        }
        let value = token.text.parse().ok()?;
        Some(Parsed::new(value, pos + 1))
    }
}

/// An integer literal or variable reference.
fn aexp_value<T>() -> SharedParser<TokenTag, Aexp<T>>
where
    T: FromStr + 'static,
{
    NumberLiteral::new()
        .map(Aexp::Int)
        .or(Tag::new(TokenTag::Id).map(Aexp::Var))
        .shared()
}

/// A parenthesized arithmetic expression.
fn aexp_group<T>() -> SharedParser<TokenTag, Aexp<T>>
where
    T: FromStr + 'static,
{
    keyword("(")
        .then(Lazy::new(aexp::<T>))
        .then(keyword(")"))
        .map(|((_, inner), _)| inner)
        .shared()
}

/// A single arithmetic operand.
fn aexp_term<T>() -> SharedParser<TokenTag, Aexp<T>>
where
    T: FromStr + 'static,
{
    aexp_value().or(aexp_group()).shared()
}

/// Maps an arithmetic operator's text to its tree constructor.
fn arith_op<T: 'static>(op: &str) -> BinaryOp<Aexp<T>> {
    match op {
        "+" => Box::new(|l, r| l + r),
        "-" => Box::new(|l, r| l - r),
        "*" => Box::new(|l, r| l * r),
        "/" => Box::new(|l, r| l / r),
        _ => unreachable!("the arithmetic operator set is fixed"),
    }
}

/// An arithmetic expression with conventional precedence: `*` and `/`
/// bind tighter than `+` and `-`, all left-associative.
pub fn aexp<T>() -> SharedParser<TokenTag, Aexp<T>>
where
    T: FromStr + 'static,
{
    precedence(
        aexp_term::<T>(),
        TokenTag::Reserved,
        &[&["*", "/"], &["+", "-"]],
        arith_op::<T>,
    )
}

/// Maps a relational operator's text to its [`RelOp`].
fn rel_op(op: &str) -> RelOp {
    match op {
        "<" => RelOp::Lt,
        "<=" => RelOp::Le,
        ">" => RelOp::Gt,
        ">=" => RelOp::Ge,
        "=" => RelOp::Eq,
        "!=" => RelOp::Ne,
        _ => unreachable!("the relational operator set is fixed"),
    }
}

/// A comparison of two arithmetic expressions.
fn bexp_rel<T>() -> SharedParser<TokenTag, Bexp<T>>
where
    T: FromStr + 'static,
{
    aexp()
        .then(any_operator(REL_OPS, TokenTag::Reserved))
        .then(aexp())
        .map(|((left, op), right)| Bexp::Rel(rel_op(&op), left, right))
        .shared()
}

/// A parenthesized boolean expression.
fn bexp_group<T>() -> SharedParser<TokenTag, Bexp<T>>
where
    T: FromStr + 'static,
{
    keyword("(")
        .then(Lazy::new(bexp::<T>))
        .then(keyword(")"))
        .map(|((_, inner), _)| inner)
        .shared()
}

/// A negated boolean term.
fn bexp_not<T>() -> SharedParser<TokenTag, Bexp<T>>
where
    T: FromStr + 'static,
{
    keyword("not")
        .then(Lazy::new(bexp_term::<T>))
        .map(|(_, inner)| Bexp::Not(Box::new(inner)))
        .shared()
}

/// A single boolean operand: negation, comparison, or group.
fn bexp_term<T>() -> SharedParser<TokenTag, Bexp<T>>
where
    T: FromStr + 'static,
{
    bexp_not().or(bexp_rel()).or(bexp_group()).shared()
}

/// Maps a logical operator's text to its tree constructor.
fn logic_op<T: 'static>(op: &str) -> BinaryOp<Bexp<T>> {
    match op {
        "and" => Box::new(|l, r| Bexp::And(Box::new(l), Box::new(r))),
        "or" => Box::new(|l, r| Bexp::Or(Box::new(l), Box::new(r))),
        _ => unreachable!("the logical operator set is fixed"),
    }
}

/// A boolean expression; `and` binds tighter than `or`.
pub fn bexp<T>() -> SharedParser<TokenTag, Bexp<T>>
where
    T: FromStr + 'static,
{
    precedence(
        bexp_term::<T>(),
        TokenTag::Reserved,
        &[&["and"], &["or"]],
        logic_op::<T>,
    )
}

/// An assignment statement.
fn stmt_assign<T>() -> SharedParser<TokenTag, Stmt<T>>
where
    T: FromStr + 'static,
{
    identifier()
        .then(keyword(":="))
        .then(aexp())
        .map(|((name, _), value)| Stmt::Assign(name, value))
        .shared()
}

/// A conditional statement with an optional `else` branch.
fn stmt_if<T>() -> SharedParser<TokenTag, Stmt<T>>
where
    T: FromStr + 'static,
{
    keyword("if")
        .then(bexp())
        .then(keyword("then"))
        .then(Lazy::new(stmt_list::<T>))
        .then(keyword("else").then(Lazy::new(stmt_list::<T>)).opt())
        .then(keyword("end"))
        .map(|(((((_, cond), _), true_case), else_branch), _)| Stmt::If {
            cond,
            true_case: Box::new(true_case),
            false_case: else_branch.map(|(_, stmt)| Box::new(stmt)),
        })
        .shared()
}

/// An iteration statement.
fn stmt_while<T>() -> SharedParser<TokenTag, Stmt<T>>
where
    T: FromStr + 'static,
{
    keyword("while")
        .then(bexp())
        .then(keyword("do"))
        .then(Lazy::new(stmt_list::<T>))
        .then(keyword("end"))
        .map(|((((_, cond), _), body), _)| Stmt::While(cond, Box::new(body)))
        .shared()
}

/// A single statement.
fn stmt<T>() -> SharedParser<TokenTag, Stmt<T>>
where
    T: FromStr + 'static,
{
    stmt_assign().or(stmt_if()).or(stmt_while()).shared()
}

/// One or more statements joined by `;`, folded into left-nested
/// [`Stmt::Seq`] nodes.
pub fn stmt_list<T>() -> SharedParser<TokenTag, Stmt<T>>
where
    T: FromStr + 'static,
{
    let separator = keyword(";").map(|_| -> BinaryOp<Stmt<T>> {
        Box::new(|first, second| Stmt::Seq(Box::new(first), Box::new(second)))
    });
    stmt().chain(separator).shared()
}

/// The grammar's entry point: a statement list that must consume the
/// entire token sequence.
pub fn program<T>() -> SharedParser<TokenTag, Stmt<T>>
where
    T: FromStr + 'static,
{
    stmt_list::<T>().phrase().shared()
}
