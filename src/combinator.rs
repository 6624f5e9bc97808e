//! The combinator engine: a [`Parser`] trait, the primitive combinators,
//! and the [`ParserExt`] builder methods that compose them.
//!
//! # Model
//! A parser is an immutable node in a combinator tree. Parsing is the pure
//! function `parse(&self, tokens, pos) -> Option<Parsed<Output>>`: all
//! state lives in the arguments and the returned [`Parsed`] record, and
//! failure is simply [`None`] — there is no error payload and no record of
//! the furthest failure. The one controlled exception to immutability is
//! [`Lazy`], which memoizes the one-time construction of its wrapped
//! parser so that mutually-recursive grammars can be defined.
//!
//! # Choice is ordered
//! [`Alternate`] commits to the first branch that matches; it never
//! explores both. Grammars with overlapping alternatives must order them
//! explicitly (for instance, try a compound form before its prefix).
//!
//! # Sharing and recursion
//! Grammar rules that are referenced from several places, or that refer to
//! themselves, are held as [`SharedParser`]s — reference-counted trait
//! objects produced by [`ParserExt::shared`]. Trees built this way are
//! deliberately `!Send`: the engine is single-threaded by construction,
//! so [`Lazy`]'s write-once cell needs no synchronization.

use std::rc::Rc;

use crate::lexer::Token;

pub mod alternate;
pub mod chain;
pub mod concat;
pub mod lazy;
pub mod map;
pub mod option;
pub mod phrase;
pub mod precedence;
pub mod repeat;
pub mod reserved;
pub mod tag;

pub use self::alternate::Alternate;
pub use self::chain::Chain;
pub use self::concat::Concat;
pub use self::lazy::Lazy;
pub use self::map::Map;
pub use self::option::Opt;
pub use self::phrase::Phrase;
pub use self::precedence::{any_operator, precedence, BinaryOp};
pub use self::repeat::Repeat;
pub use self::reserved::Reserved;
pub use self::tag::Tag;

/// A successful parse: the produced value and the token index immediately
/// after the consumed tokens.
///
/// `pos` never exceeds the length of the token sequence handed to
/// [`Parser::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<O> {
    /// The value produced by the parser.
    pub value: O,
    /// The index of the next unconsumed token.
    pub pos: usize,
}

impl<O> Parsed<O> {
    /// Constructs a new parse record.
    pub fn new(value: O, pos: usize) -> Self {
        Self { value, pos }
    }

    /// Replaces the value with `f(value)`, carrying the position through.
    pub fn map<U, F>(self, f: F) -> Parsed<U>
    where
        F: FnOnce(O) -> U,
    {
        Parsed {
            value: f(self.value),
            pos: self.pos,
        }
    }
}

/// A composable parser over tokens tagged with `T`.
pub trait Parser<T> {
    /// The type of value this parser produces on success.
    type Output;

    /// Attempts to parse a prefix of `tokens` starting at `pos`.
    ///
    /// Returns [`None`] on "no match"; this is ordinary control flow, not
    /// an error. The same inputs always yield the same result.
    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>>;
}

/// A reference-counted, type-erased parser, suitable for shared and
/// recursive grammar rules.
pub type SharedParser<T, O> = Rc<dyn Parser<T, Output = O>>;

impl<T, P> Parser<T> for Rc<P>
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<Self::Output>> {
        (**self).parse(tokens, pos)
    }
}

/// Builder methods available on every [`Parser`].
pub trait ParserExt<T>: Parser<T> {
    /// Sequencing: parses `self` then `right`, producing the pair of both
    /// values. See [`Concat`].
    fn then<R>(self, right: R) -> Concat<Self, R>
    where
        Self: Sized,
        R: Parser<T>,
    {
        Concat::new(self, right)
    }

    /// Ordered choice: tries `self`, falling back to `right` from the same
    /// starting position. See [`Alternate`].
    fn or<R>(self, right: R) -> Alternate<Self, R>
    where
        Self: Sized,
        R: Parser<T, Output = Self::Output>,
    {
        Alternate::new(self, right)
    }

    /// Applies `f` to the successful value. See [`Map`].
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Makes `self` optional. See [`Opt`].
    fn opt(self) -> Opt<Self>
    where
        Self: Sized,
    {
        Opt::new(self)
    }

    /// Collects zero or more matches of `self`. See [`Repeat`].
    fn repeat(self) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self)
    }

    /// Left-recursion-safe iteration over `self` joined by `separator`.
    /// See [`Chain`].
    fn chain<S>(self, separator: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Parser<T>,
    {
        Chain::new(self, separator)
    }

    /// Requires `self` to consume the entire token sequence. See
    /// [`Phrase`].
    fn phrase(self) -> Phrase<Self>
    where
        Self: Sized,
    {
        Phrase::new(self)
    }

    /// Erases the concrete parser type behind a [`SharedParser`].
    fn shared(self) -> SharedParser<T, Self::Output>
    where
        Self: Sized + 'static,
        T: 'static,
    {
        Rc::new(self)
    }
}

impl<T, P: Parser<T>> ParserExt<T> for P {}
