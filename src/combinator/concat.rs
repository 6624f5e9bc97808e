//! The [`Concat`] sequencing combinator.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Sequencing: parses `left`, then `right` from where `left` stopped,
/// producing the pair of both values. Fails if either side fails; no
/// partial consumption is observable by the caller.
///
/// Usually written with [`ParserExt::then`](super::ParserExt::then), whose
/// repeated application nests pairs to the left:
/// `a.then(b).then(c)` produces `((A, B), C)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concat<L, R> {
    /// The parser applied first.
    left: L,
    /// The parser applied at `left`'s resulting position.
    right: R,
}

impl<L, R> Concat<L, R> {
    /// Constructs the sequence `left` then `right`.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<T, L, R> Parser<T> for Concat<L, R>
where
    L: Parser<T>,
    R: Parser<T>,
{
    type Output = (L::Output, R::Output);

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        let left = self.left.parse(tokens, pos)?;
        let right = self.right.parse(tokens, left.pos)?;
        Some(Parsed::new((left.value, right.value), right.pos))
    }
}
