//! The [`Token`] type produced by lexing.

/// A single lexical unit: the matched text together with the tag of the
/// rule that produced it.
///
/// The tag type `T` is supplied by the client; it is typically a small
/// `Copy` enum naming the token categories of a particular language.
/// Equality is structural over both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<T> {
    /// The text matched by the lexer rule.
    pub text: String,
    /// The category assigned by the lexer rule.
    pub tag: T,
}

impl<T> Token<T> {
    /// Constructs a new token from the matched `text` and its `tag`.
    pub fn new(text: impl Into<String>, tag: T) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Token<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.text, self.tag)
    }
}
