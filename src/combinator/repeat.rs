//! The [`Repeat`] collection combinator.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Applies the inner parser repeatedly from the current position,
/// collecting each successful value, until it fails. Never fails itself;
/// zero matches produce an empty collection.
///
/// # Position quirk
/// The returned position is the **starting** position, not the position
/// after the last collected match. This reproduces the observed behavior
/// of the engine this crate reimplements, where `Repeat` is used only for
/// value collection and never to hand a position to a following parser.
/// It looks like a latent upstream defect, but it is preserved verbatim
/// (and pinned by a test) pending upstream clarification; do not "fix" it.
///
/// # Termination
/// The inner parser must consume at least one token per success. An inner
/// parser that succeeds without consuming (such as [`Opt`](super::Opt))
/// makes `Repeat` loop forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<P> {
    /// The wrapped parser.
    inner: P,
}

impl<P> Repeat<P> {
    /// Wraps `inner`, collecting its matches.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<T, P> Parser<T> for Repeat<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        let mut values = Vec::new();
        let mut cursor = pos;
        while let Some(parsed) = self.inner.parse(tokens, cursor) {
            values.push(parsed.value);
            cursor = parsed.pos;
        }
        Some(Parsed::new(values, pos))
    }
}
