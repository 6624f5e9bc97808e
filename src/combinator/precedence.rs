//! Precedence climbing: multi-level left-associative expression parsing
//! built out of [`Chain`](super::Chain).

use super::{ParserExt, Reserved, SharedParser};

/// A binary combining function over parse values, as produced by an
/// operator parser.
pub type BinaryOp<O> = Box<dyn Fn(O, O) -> O>;

/// An ordered choice over the reserved operators in `ops`, all carrying
/// `tag`; produces the matched operator text.
///
/// # Panics
/// Panics if `ops` is empty.
pub fn any_operator<T>(ops: &[&str], tag: T) -> SharedParser<T, String>
where
    T: Clone + PartialEq + 'static,
{
    ops.iter()
        .map(|op| Reserved::new(*op, tag.clone()).shared())
        .reduce(|left, right| left.or(right).shared())
        .expect("an operator level must name at least one operator")
}

/// Builds a multi-level left-associative expression parser.
///
/// `levels` lists operator groups from tightest-binding to loosest (for
/// conventional arithmetic: `&[&["*", "/"], &["+", "-"]]`); `combine` maps
/// an operator's text to the binary function that joins its operands. Each
/// level chains the running parser with that level's operators, so an
/// earlier level's operators are folded into sub-expressions before a
/// later level's operators see them.
///
/// # Panics
/// Panics if any level is empty (see [`any_operator`]).
pub fn precedence<T, O, C>(
    term: SharedParser<T, O>,
    tag: T,
    levels: &[&[&str]],
    combine: C,
) -> SharedParser<T, O>
where
    T: Clone + PartialEq + 'static,
    O: 'static,
    C: Fn(&str) -> BinaryOp<O> + Clone + 'static,
{
    let mut parser = term;
    for level in levels {
        let combine = combine.clone();
        let operator = any_operator(level, tag.clone()).map(move |op| combine(&op));
        parser = parser.chain(operator).shared();
    }
    parser
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{lexer, Tok};
    use super::super::{Parser, ParserExt, Tag};
    use super::*;

    /// Evaluating arithmetic directly keeps the trees out of the way; the
    /// IMP grammar tests cover the tree shapes.
    fn arithmetic() -> SharedParser<Tok, i64> {
        let number = Tag::new(Tok::Number)
            .map(|text| text.parse::<i64>().unwrap())
            .shared();
        precedence(
            number,
            Tok::Reserved,
            &[&["*", "/"], &["+", "-"]],
            |op| match op {
                "+" => Box::new(|l, r| l + r),
                "-" => Box::new(|l, r| l - r),
                "*" => Box::new(|l, r| l * r),
                "/" => Box::new(|l, r| l / r),
                _ => unreachable!("operator set is fixed"),
            },
        )
    }

    #[test]
    fn earlier_levels_bind_tighter() {
        let tokens = lexer().lex("2 + 3 * 4").unwrap();
        let parsed = arithmetic().parse(&tokens, 0).unwrap();
        // 2 + (3 * 4), not (2 + 3) * 4.
        assert_eq!(parsed.value, 14);
        assert_eq!(parsed.pos, tokens.len());
    }

    #[test]
    fn every_level_folds_left_associatively() {
        let tokens = lexer().lex("8 / 2 / 2").unwrap();
        assert_eq!(arithmetic().parse(&tokens, 0).unwrap().value, 2);

        let tokens = lexer().lex("9 - 3 - 2 + 1").unwrap();
        assert_eq!(arithmetic().parse(&tokens, 0).unwrap().value, 5);
    }

    #[test]
    fn any_operator_matches_in_declaration_order() {
        let tokens = lexer().lex("*").unwrap();
        let parser = any_operator(&["+", "-", "*", "/"], Tok::Reserved);
        assert_eq!(parser.parse(&tokens, 0).unwrap().value, "*");
    }
}
