//! The [`Chain`] left-recursion-safe iteration combinator.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Parses `inner` one or more times, joined by `separator`, folding the
/// values together from the left.
///
/// The separator is itself a parser whose *value* must be a binary
/// combining function (usually a [`Map`](super::Map) over an operator
/// token). After an initial `inner` match, `Chain` repeatedly attempts
/// `separator` then `inner`; each time the pair matches it combines the
/// accumulated value with the new right-hand value and advances. When the
/// pair no longer matches, the last accumulated result is returned.
///
/// This turns the left-recursive rule `E → E op E | inner` into an
/// iterative left fold — `9 - 3 - 2` combines as `(9 - 3) - 2` — and it
/// terminates provided every iteration consumes at least the separator
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<P, S> {
    /// The operand parser.
    inner: P,
    /// The separator parser, producing a combining function.
    separator: S,
}

impl<P, S> Chain<P, S> {
    /// Constructs a chain of `inner` joined by `separator`.
    pub fn new(inner: P, separator: S) -> Self {
        Self { inner, separator }
    }
}

impl<T, P, S> Parser<T> for Chain<P, S>
where
    P: Parser<T>,
    S: Parser<T>,
    S::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        let mut acc = self.inner.parse(tokens, pos)?;
        loop {
            let separator = match self.separator.parse(tokens, acc.pos) {
                Some(separator) => separator,
                None => break,
            };
            let right = match self.inner.parse(tokens, separator.pos) {
                Some(right) => right,
                None => break,
            };
            acc = Parsed::new((separator.value)(acc.value, right.value), right.pos);
        }
        Some(acc)
    }
}
