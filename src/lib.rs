//! A parser-combinator engine with a regex-driven lexer.
//!
//! The crate turns raw text into values in two stages. A [`lexer::Lexer`]
//! built from an ordered list of regex rules converts text into a flat
//! sequence of tagged [`lexer::Token`]s; a tree of
//! [`combinator::Parser`]s — composed from a small set of primitives via
//! [`combinator::ParserExt`] — then turns that token sequence into an AST
//! or any other derived value. The [`combinator::precedence`] helper
//! builds multi-level left-associative expression parsers on top of the
//! [`combinator::Chain`] primitive, which handles grammars that would
//! otherwise be left-recursive.
//!
//! The [`imp`] module is a complete worked example: a grammar, AST, and
//! tree-walk interpreter for the IMP teaching language, exercised by the
//! `combi run` binary.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

extern crate static_assertions as sa;

pub mod cli;
pub mod combinator;
pub mod imp;
pub mod lexer;

// Tokens and parse records are plain values; grammars must stay shareable
// within a thread but are deliberately not Send.
sa::assert_impl_all!(lexer::Token<u32>: Clone, PartialEq);
sa::assert_impl_all!(combinator::Parsed<String>: Clone, PartialEq);
sa::assert_not_impl_any!(combinator::SharedParser<u32, String>: Send, Sync);
