//! The [`Tag`] leaf matcher.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Matches exactly one token carrying the expected tag, regardless of its
/// text; the matched text is the produced value. This is the matcher for
/// open token classes such as identifiers and numeric literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<T> {
    /// The tag the token must carry.
    tag: T,
}

impl<T> Tag<T> {
    /// Constructs a matcher for tokens tagged with `tag`.
    pub fn new(tag: T) -> Self {
        Self { tag }
    }
}

impl<T: PartialEq> Parser<T> for Tag<T> {
    type Output = String;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<String>> {
        let token = tokens.get(pos)?;
        if token.tag == self.tag {
            Some(Parsed::new(token.text.clone(), pos + 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{lexer, Tok};
    use super::*;

    #[test]
    fn matches_any_text_with_the_tag() {
        let tokens = lexer().lex("banana").unwrap();
        let parsed = Tag::new(Tok::Id).parse(&tokens, 0).unwrap();
        assert_eq!(parsed.value, "banana");
        assert_eq!(parsed.pos, 1);
    }

    #[test]
    fn rejects_other_tags_and_end_of_input() {
        let tokens = lexer().lex("42").unwrap();
        assert!(Tag::new(Tok::Id).parse(&tokens, 0).is_none());
        assert!(Tag::new(Tok::Number).parse(&tokens, 1).is_none());
    }
}
