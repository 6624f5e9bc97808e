//! The [`Map`] value-transforming combinator.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Applies a pure function to the inner parser's successful value; the
/// resulting position is carried through unchanged and failure propagates
/// untouched. This is how token text becomes AST nodes.
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    /// The wrapped parser.
    inner: P,
    /// The transform applied to successful values.
    f: F,
}

impl<P, F> Map<P, F> {
    /// Wraps `inner`, transforming its values with `f`.
    pub fn new(inner: P, f: F) -> Self {
        Self { inner, f }
    }
}

impl<T, P, F, U> Parser<T> for Map<P, F>
where
    P: Parser<T>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<U>> {
        self.inner
            .parse(tokens, pos)
            .map(|parsed| parsed.map(&self.f))
    }
}
