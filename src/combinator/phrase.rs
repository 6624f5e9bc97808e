//! The [`Phrase`] full-consumption wrapper.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Succeeds only if the inner parser succeeds *and* its resulting position
/// equals the full token-sequence length. Wrapped around a grammar's entry
/// rule — exactly once, at the top — it rejects inputs with trailing
/// tokens the grammar did not account for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase<P> {
    /// The wrapped parser.
    inner: P,
}

impl<P> Phrase<P> {
    /// Wraps `inner`, requiring it to consume every token.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<T, P> Parser<T> for Phrase<P>
where
    P: Parser<T>,
{
    type Output = P::Output;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        self.inner
            .parse(tokens, pos)
            .filter(|parsed| parsed.pos == tokens.len())
    }
}
