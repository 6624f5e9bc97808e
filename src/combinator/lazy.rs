//! The [`Lazy`] deferred-construction combinator.

use once_cell::unsync::OnceCell;

use crate::lexer::Token;

use super::{Parsed, Parser, SharedParser};

/// Defers construction of a parser until its first use, then caches it
/// permanently.
///
/// Grammar rules routinely refer to each other mutually (a statement list
/// refers to statements, which refer back to statement lists); building
/// such a grammar eagerly would recurse forever at construction time.
/// `Lazy` breaks the cycle: it holds a zero-argument factory and a
/// write-once cell, and invokes the factory at most once, on the first
/// [`parse`](Parser::parse) call, no matter how many parses follow or how
/// often the grammar recurses through it within a single parse.
pub struct Lazy<T, O> {
    /// Builds the wrapped parser on first use.
    factory: Box<dyn Fn() -> SharedParser<T, O>>,
    /// Caches the factory's product.
    cell: OnceCell<SharedParser<T, O>>,
}

impl<T, O> Lazy<T, O> {
    /// Constructs a lazy parser around `factory`.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> SharedParser<T, O> + 'static,
    {
        Self {
            factory: Box::new(factory),
            cell: OnceCell::new(),
        }
    }
}

impl<T, O> std::fmt::Debug for Lazy<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("initialized", &self.cell.get().is_some())
            .finish()
    }
}

impl<T, O> Parser<T> for Lazy<T, O> {
    type Output = O;

    fn parse(&self, tokens: &[Token<T>], pos: usize) -> Option<Parsed<O>> {
        self.cell.get_or_init(|| (self.factory)()).parse(tokens, pos)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::super::fixtures::{lexer, Tok};
    use super::super::{ParserExt, Tag};
    use super::*;

    #[test]
    fn factory_runs_at_most_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let parser = Lazy::new(move || {
            counter.set(counter.get() + 1);
            Tag::new(Tok::Id).shared()
        });

        let tokens = lexer().lex("a b").unwrap();
        assert_eq!(calls.get(), 0);

        assert_eq!(parser.parse(&tokens, 0).unwrap().value, "a");
        assert_eq!(parser.parse(&tokens, 1).unwrap().value, "b");
        assert!(parser.parse(&tokens, 2).is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn factory_runs_once_even_when_the_grammar_recurses() {
        // parens ::= `(` parens `)` | ID — every nesting level re-enters
        // the same Lazy node.
        let calls = Rc::new(Cell::new(0));

        fn parens(calls: Rc<Cell<u32>>) -> SharedParser<Tok, String> {
            use super::super::Reserved;
            let inner = Lazy::new(move || {
                calls.set(calls.get() + 1);
                parens(calls.clone())
            });
            Reserved::new("(", Tok::Reserved)
                .then(inner)
                .then(Reserved::new(")", Tok::Reserved))
                .map(|((_, inner), _)| inner)
                .or(Tag::new(Tok::Id))
                .shared()
        }

        let parser = parens(calls.clone());
        let tokens = lexer().lex("(((x)))").unwrap();
        let parsed = parser.parse(&tokens, 0).unwrap();
        assert_eq!(parsed.value, "x");
        assert_eq!(parsed.pos, tokens.len());
        // One Lazy node per constructed level, each initialized once.
        assert_eq!(calls.get(), 3);
    }
}
