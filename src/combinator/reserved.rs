//! The [`Reserved`] leaf matcher.

use crate::lexer::Token;

use super::{Parsed, Parser};

/// Matches exactly one token whose text and tag both equal the expected
/// values; typically used for keywords and fixed operator symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reserved<T> {
    /// The exact token text to accept.
    text: String,
    /// The tag the token must carry.
    tag: T,
}

impl<T> Reserved<T> {
    /// Constructs a matcher for the token `(text, tag)`.
    pub fn new(text: impl Into<String>, tag: T) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

impl<T: PartialEq> Parser<T> for Reserved<T> {
    type Output = String;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<String>> {
        let token = tokens.get(pos)?;
        if token.text == self.text && token.tag == self.tag {
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
    fn matches_text_and_tag() {
        let tokens = lexer().lex(":=").unwrap();
        let parsed = Reserved::new(":=", Tok::Reserved)
            .parse(&tokens, 0)
            .unwrap();
        assert_eq!(parsed.value, ":=");
        assert_eq!(parsed.pos, 1);
    }

    #[test]
    fn rejects_wrong_text_or_tag() {
        let tokens = lexer().lex("42").unwrap();
        assert!(Reserved::new(":=", Tok::Reserved).parse(&tokens, 0).is_none());
        assert!(Reserved::new("42", Tok::Reserved).parse(&tokens, 0).is_none());
    }

    #[test]
    fn rejects_end_of_input() {
        let tokens = lexer().lex("").unwrap();
        assert!(Reserved::new(":=", Tok::Reserved).parse(&tokens, 0).is_none());
    }
}
