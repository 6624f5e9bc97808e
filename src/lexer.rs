//! A table-driven lexer over ordered regex rules.
//!
//! A [`Lexer`] is built from an ordered list of `(pattern, tag)` rules.
//! At each cursor position it tries every rule in registration order and
//! commits to the first match; there is no longest-match disambiguation
//! across rules. Order is therefore a contract: register more specific
//! patterns (say, the keyword `if`) before more general ones (an
//! identifier pattern) when both could match the same prefix.
//!
//! Rules registered with [`Lexer::skip`] consume input without producing
//! tokens, which is how whitespace and comments are discarded.

use regex::Regex;
use thiserror::Error;

pub mod token;

pub use self::token::Token;

/// The error type produced while building or running a [`Lexer`].
#[derive(Debug, Error)]
pub enum LexError {
    /// A rule's pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// No rule matched at the current position. The whole lex aborts;
    /// no partial token list is returned.
    #[error("illegal character {character:?} at byte {position}")]
    IllegalCharacter {
        /// The first character at the unmatched position.
        character: char,
        /// The byte offset of the unmatched position.
        position: usize,
    },
}

/// A single lexer rule: an anchored pattern and the tag to emit, where
/// `None` marks a skip rule.
#[derive(Debug, Clone)]
struct Rule<T> {
    /// The compiled pattern, anchored to the start of the remaining input.
    pattern: Regex,
    /// The tag to attach to matched text, or `None` to discard it.
    tag: Option<T>,
}

/// A lexer over an ordered list of regex rules.
#[derive(Debug, Clone, Default)]
pub struct Lexer<T> {
    /// The registered rules, in registration order.
    rules: Vec<Rule<T>>,
}

impl<T> Lexer<T> {
    /// Constructs a lexer with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registers a rule that emits a [`Token`] tagged with `tag`.
    pub fn token(self, pattern: &str, tag: T) -> Result<Self, LexError> {
        self.rule(pattern, Some(tag))
    }

    /// Registers a rule whose matches are consumed and discarded.
    pub fn skip(self, pattern: &str) -> Result<Self, LexError> {
        self.rule(pattern, None)
    }

    /// Compiles `pattern` anchored at the cursor and appends it to the
    /// rule table.
    fn rule(mut self, pattern: &str, tag: Option<T>) -> Result<Self, LexError> {
        let pattern = Regex::new(&format!(r"\A(?:{pattern})"))?;
        self.rules.push(Rule { pattern, tag });
        Ok(self)
    }
}

impl<T: Clone> Lexer<T> {
    /// Converts `text` into a sequence of tokens.
    ///
    /// Fails with [`LexError::IllegalCharacter`] as soon as no rule
    /// matches at the cursor. A rule matching the empty string is treated
    /// as a non-match, so the cursor always advances.
    pub fn lex(&self, text: &str) -> Result<Vec<Token<T>>, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while let Some(character) = text[pos..].chars().next() {
            let matched = self.rules.iter().find_map(|rule| {
                rule.pattern
                    .find(&text[pos..])
                    .filter(|m| !m.as_str().is_empty())
                    .map(|m| (m.as_str(), &rule.tag))
            });

            match matched {
                Some((lexeme, tag)) => {
                    if let Some(tag) = tag {
                        tokens.push(Token::new(lexeme, tag.clone()));
                    }
                    pos += lexeme.len();
                }
                None => {
                    return Err(LexError::IllegalCharacter {
                        character,
                        position: pos,
                    })
                }
            }
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Token categories for the test rule tables.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tag {
        Reserved,
        Id,
        Number,
    }

    fn lexer() -> Lexer<Tag> {
        Lexer::new()
            .skip(r"[ \n\t]+")
            .unwrap()
            .skip(r"#[^\n]*")
            .unwrap()
            .token(r":=", Tag::Reserved)
            .unwrap()
            .token(r"if", Tag::Reserved)
            .unwrap()
            .token(r"[0-9]+", Tag::Number)
            .unwrap()
            .token(r"[A-Za-z][A-Za-z0-9_]*", Tag::Id)
            .unwrap()
    }

    #[test]
    fn lexes_in_rule_order_and_drops_skips() {
        let tokens = lexer().lex("x := 42 # trailing comment").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new("x", Tag::Id),
                Token::new(":=", Tag::Reserved),
                Token::new("42", Tag::Number),
            ]
        );
    }

    #[test]
    fn earlier_rules_win_at_a_shared_prefix() {
        // `if` is registered before the identifier rule, so it lexes as a
        // reserved word even though the identifier pattern also matches.
        let tokens = lexer().lex("if").unwrap();
        assert_eq!(tokens, vec![Token::new("if", Tag::Reserved)]);

        let general_first = Lexer::new()
            .token(r"[A-Za-z]+", Tag::Id)
            .unwrap()
            .token(r"if", Tag::Reserved)
            .unwrap();
        let tokens = general_first.lex("if").unwrap();
        assert_eq!(tokens, vec![Token::new("if", Tag::Id)]);
    }

    #[test]
    fn fails_at_the_first_unmatched_position() {
        let error = lexer().lex("x := $5").unwrap_err();
        match error {
            LexError::IllegalCharacter {
                character,
                position,
            } => {
                assert_eq!(character, '$');
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_invalid_patterns() {
        let error = Lexer::<Tag>::new().token(r"(", Tag::Reserved).unwrap_err();
        assert!(matches!(error, LexError::Pattern(_)));
    }
}
