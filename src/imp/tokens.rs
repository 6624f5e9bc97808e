//! The IMP token table.

use crate::lexer::{LexError, Lexer};

/// The token categories of IMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTag {
    /// Keywords and fixed operator symbols.
    Reserved,
    /// Integer literals.
    Number,
    /// Variable names.
    Id,
}

impl std::fmt::Display for TokenTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenTag::Reserved => write!(f, "RESERVED"),
            TokenTag::Number => write!(f, "NUMBER"),
            TokenTag::Id => write!(f, "ID"),
        }
    }
}

/// Builds the IMP lexer.
///
/// Rule order is load-bearing: two-character operators precede their
/// one-character prefixes, and keywords precede the identifier rule. The
/// keyword rules are not word-bounded, so identifiers may not *begin*
/// with a keyword (`iffy` lexes as `if` + `fy`); IMP inherits this from
/// the grammar family it reimplements.
pub fn lexer() -> Result<Lexer<TokenTag>, LexError> {
    Lexer::new()
        // whitespace and comments
        .skip(r"[ \n\t]+")?
        .skip(r"#[^\n]*")?
        // assignment, grouping, sequencing
        .token(r":=", TokenTag::Reserved)?
        .token(r"\(", TokenTag::Reserved)?
        .token(r"\)", TokenTag::Reserved)?
        .token(r";", TokenTag::Reserved)?
        // arithmetic and relational operators
        .token(r"\+", TokenTag::Reserved)?
        .token(r"-", TokenTag::Reserved)?
        .token(r"\*", TokenTag::Reserved)?
        .token(r"/", TokenTag::Reserved)?
        .token(r"<=", TokenTag::Reserved)?
        .token(r"<", TokenTag::Reserved)?
        .token(r">=", TokenTag::Reserved)?
        .token(r">", TokenTag::Reserved)?
        .token(r"!=", TokenTag::Reserved)?
        .token(r"=", TokenTag::Reserved)?
        // boolean operators
        .token(r"and", TokenTag::Reserved)?
        .token(r"or", TokenTag::Reserved)?
        .token(r"not", TokenTag::Reserved)?
        // statement keywords
        .token(r"if", TokenTag::Reserved)?
        .token(r"then", TokenTag::Reserved)?
        .token(r"else", TokenTag::Reserved)?
        .token(r"while", TokenTag::Reserved)?
        .token(r"do", TokenTag::Reserved)?
        .token(r"end", TokenTag::Reserved)?
        // literals and names
        .token(r"[0-9]+", TokenTag::Number)?
        .token(r"[A-Za-z][A-Za-z0-9_]*", TokenTag::Id)
}
