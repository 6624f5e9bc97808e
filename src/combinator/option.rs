//! The [`Opt`] optionality combinator.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Makes the inner parser optional: always succeeds, producing
/// `Some(value)` when the inner parser matches and `None` — with the
/// starting position unchanged and no tokens consumed — when it does not.
///
/// The usual home for optional syntax such as the `else` branch of a
/// conditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt<P> {
    /// The wrapped parser.
    inner: P,
}

impl<P> Opt<P> {
    /// Wraps `inner`, making it optional.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<T, P> Parser<T> for Opt<P>
where
    P: Parser<T>,
{
    type Output = Option<P::Output>;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        match self.inner.parse(tokens, pos) {
            Some(parsed) => Some(parsed.map(Some)),
            None => Some(Parsed::new(None, pos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{lexer, Tok};
    use super::super::{Parser, ParserExt, Reserved, Tag};

    #[test]
    fn consumes_the_branch_when_present() {
        let tokens = lexer().lex("if a else b").unwrap();
        let parser = Reserved::new("if", Tok::Reserved)
            .then(Tag::new(Tok::Id))
            .then(Reserved::new("else", Tok::Reserved).then(Tag::new(Tok::Id)).opt());
        let parsed = parser.parse(&tokens, 0).unwrap();
        assert_eq!(parsed.pos, tokens.len());
        let ((_, _), else_branch) = parsed.value;
        assert_eq!(else_branch, Some(("else".to_string(), "b".to_string())));
    }

    #[test]
    fn succeeds_without_consuming_when_absent() {
        let tokens = lexer().lex("if a").unwrap();
        let parser = Reserved::new("if", Tok::Reserved)
            .then(Tag::new(Tok::Id))
            .then(Reserved::new("else", Tok::Reserved).then(Tag::new(Tok::Id)).opt());
        let parsed = parser.parse(&tokens, 0).unwrap();
        assert_eq!(parsed.pos, tokens.len());
        assert_eq!(parsed.value.1, None);
    }
}
