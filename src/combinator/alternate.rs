//! The [`Alternate`] ordered-choice combinator.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Ordered choice: tries `left`; if it fails, tries `right` from the same
/// starting position. Both branches must produce the same output type.
///
/// This is PEG-style first-match choice, not general backtracking: if
/// `left` succeeds, `right` is never consulted, even when `left`'s match
/// later causes an enclosing parser to fail. Overlapping alternatives must
/// be ordered explicitly by the grammar author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate<L, R> {
    /// The preferred branch.
    left: L,
    /// The fallback branch.
    right: R,
}

impl<L, R> Alternate<L, R> {
    /// Constructs the ordered choice of `left` over `right`.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<T, L, R> Parser<T> for Alternate<L, R>
where
    L: Parser<T>,
    R: Parser<T, Output = L::Output>,
{
    type Output = L::Output;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        self.left
            .parse(tokens, pos)
            .or_else(|| self.right.parse(tokens, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{lexer, Tok};
    use super::super::{ParserExt, Reserved, Tag};
    use super::*;

    #[test]
    fn falls_back_in_declaration_order() {
        let tokens = lexer().lex("*").unwrap();
        let parser = Reserved::new("+", Tok::Reserved)
            .or(Reserved::new("-", Tok::Reserved))
            .or(Reserved::new("*", Tok::Reserved))
            .or(Reserved::new("/", Tok::Reserved));
        let parsed = parser.parse(&tokens, 0).unwrap();
        assert_eq!(parsed.value, "*");
        assert_eq!(parsed.pos, 1);
    }

    #[test]
    fn is_left_biased_when_both_branches_match() {
        let tokens = lexer().lex("banana").unwrap();
        // Both branches match an identifier; the left one rewrites the
        // value so the winner is observable.
        let parser = Tag::new(Tok::Id)
            .map(|_| "left")
            .or(Tag::new(Tok::Id).map(|_| "right"));
        assert_eq!(parser.parse(&tokens, 0).unwrap().value, "left");
    }

    #[test]
    fn fails_only_when_both_branches_fail() {
        let tokens = lexer().lex("42").unwrap();
        let parser = Tag::new(Tok::Id).or(Tag::new(Tok::Reserved));
        assert!(parser.parse(&tokens, 0).is_none());
    }
}
