#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::parser::{fail_with, pure, Parser};
use crate::primitive::{character, whitespace};
use crate::result::ParseResult;
use crate::stream::{Input, PChar};

/// Applies `p` for as long as it succeeds, starting from `input`.
///
/// The failing attempt is discarded, so the returned remainder is where the
/// last success left off. Only the first success of each attempt is followed.
fn repeat<T: 'static>(p: &Parser<T>, input: Input) -> (Vec<T>, Input) {
    let mut values = Vec::new();
    let mut rest = input;
    while let Some((value, next)) = p.parse_input(&rest).into_values().into_iter().next() {
        debug_assert!(
            next.len() < rest.len(),
            "parser repeated by `many` succeeded without consuming input at {}",
            rest.location()
        );
        values.push(value);
        rest = next;
    }
    (values, rest)
}

/// `first` once, then `more` as many times as it matches.
fn at_least_one<T: 'static>(first: Parser<T>, more: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| match first.parse_input(input) {
        ParseResult::Faulted(errors) => ParseResult::Faulted(errors),
        ParseResult::Success(pairs) => ParseResult::Success(
            pairs
                .into_iter()
                .map(|(head, rest)| {
                    let (tail, rest) = repeat(&more, rest);
                    (cons(head, tail), rest)
                })
                .collect(),
        ),
    })
}

/// Zero or more `p`. Never fails.
///
/// `p` must consume input whenever it succeeds, otherwise this loops forever.
/// Debug builds assert on it.
pub fn many<T: 'static>(p: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let (values, rest) = repeat(&p, input.clone());
        ParseResult::success(values, rest)
    })
}

/// One or more `p`. Fails with `p`'s error if the first attempt fails.
pub fn many1<T: 'static>(p: Parser<T>) -> Parser<Vec<T>> {
    at_least_one(p.clone(), p)
}

/// `first` if it succeeds, otherwise `second` from the same input.
///
/// Whatever `first` consumed before failing is dropped. When both fail the
/// error of `second` is reported.
pub fn choice<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    Parser::new(move |input| match first.parse_input(input) {
        ParseResult::Faulted(_) => second.parse_input(input),
        success => success,
    })
}

/// `choice` folded over a list of alternatives, tried in order.
pub fn choices<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .reduce(choice)
        .unwrap_or_else(|| fail_with("an alternative"))
}

/// The characters of `s`, in order.
pub fn string(s: &str) -> Parser<Vec<PChar>> {
    s.chars().fold(pure(Vec::new()), |matched, c| {
        matched.bind(move |prefix: Vec<PChar>| {
            character(c).map(move |pc| {
                let mut chars = prefix.clone();
                chars.push(pc);
                chars
            })
        })
    })
}

pub fn cons<T>(head: T, mut tail: Vec<T>) -> Vec<T> {
    tail.insert(0, head);
    tail
}

/// `Some` value of `p`, or `None` without consuming anything.
pub fn optional<T: 'static>(p: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |input| match p.parse_input(input) {
        ParseResult::Faulted(_) => ParseResult::success(None, input.clone()),
        success => success.map(Some),
    })
}

/// One or more `p`, separated by `sep`.
pub fn sep_by1<T: 'static, U: 'static>(p: Parser<T>, sep: Parser<U>) -> Parser<Vec<T>> {
    at_least_one(p.clone(), sep.ignore_then(p))
}

/// Zero or more `p`, separated by `sep`. A trailing separator is left
/// unconsumed.
pub fn sep_by<T: 'static, U: 'static>(p: Parser<T>, sep: Parser<U>) -> Parser<Vec<T>> {
    optional(sep_by1(p, sep)).map(Option::unwrap_or_default)
}

pub fn between<A: 'static, T, B: 'static>(
    open: Parser<A>,
    p: Parser<T>,
    close: Parser<B>,
) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    open.ignore_then(p).then_ignore(close)
}

/// `p` followed by any whitespace.
pub fn lexeme<T: Clone + Send + Sync + 'static>(p: Parser<T>) -> Parser<T> {
    p.then_ignore(whitespace())
}

pub fn symbol(s: &str) -> Parser<Vec<PChar>> {
    lexeme(string(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParserError;
    use crate::parser::fail;
    use crate::primitive::{digit, item};
    use crate::stream::{to_text, Position};

    fn digit_list() -> Parser<Vec<PChar>> {
        character('[').ignore_then(digit()).bind(|d| {
            many(character(',').ignore_then(digit()))
                .then_ignore(character(']'))
                .map(move |ds| cons(d, ds))
        })
    }

    #[test]
    fn parses_digit_list() {
        let (digits, rest) = digit_list().parse("[1,2,3,4]").into_first().unwrap();
        assert_eq!(to_text(&digits), "1234");
        assert!(rest.is_empty());
    }

    #[test]
    fn reports_missing_close_at_end_of_input() {
        let res = digit_list().parse("[1,2,3,4");
        assert!(res.is_faulted());
        assert_eq!(res.errors().len(), 1);
        assert_eq!(res.errors()[0].expected(), "']'");
        assert!(res.errors()[0].input().is_empty());
    }

    #[test]
    fn reports_unexpected_character_position() {
        let res = digit_list().parse("[1,2,3,4*");
        assert!(res.is_faulted());
        let error = &res.errors()[0];
        assert_eq!(error.expected(), "']'");
        assert_eq!(error.position(), Some(Position { line: 1, column: 9 }));
    }

    #[test]
    fn many_collects_in_order() {
        let (chars, rest) = many(character('a')).parse("aaabcde").into_first().unwrap();
        assert_eq!(to_text(&chars), "aaa");
        assert_eq!(rest.to_text(), "bcde");
    }

    #[test]
    fn many_succeeds_on_zero_matches() {
        let input = Input::new("bcde");
        let res = many(character('a')).parse_input(&input);
        assert_eq!(res, ParseResult::success(Vec::new(), input));
    }

    #[test]
    fn many_backtracks_partial_attempt() {
        let pair = character('a').then(character('b'));
        let (pairs, rest) = many(pair).parse("ababac").into_first().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(rest.to_text(), "ac");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "without consuming input")]
    fn many_asserts_on_non_consuming_parser() {
        let _ = many(pure(1)).parse("a");
    }

    #[test]
    fn many1_requires_one_match() {
        let (chars, rest) = many1(character('a')).parse("aaabcde").into_first().unwrap();
        assert_eq!(to_text(&chars), "aaa");
        assert_eq!(rest.to_text(), "bcde");

        let input = Input::new("bcde");
        let res = many1(character('a')).parse_input(&input);
        assert!(res.values().is_empty());
        assert_eq!(res.errors(), &[ParserError::new("'a'", input)][..]);
    }

    #[test]
    fn choice_keeps_first_success() {
        let d = PChar::new('d', Position::start());
        let (c, rest) = choice(item(), pure(d)).parse("abc").into_first().unwrap();
        assert_eq!(c.value, 'a');
        assert_eq!(rest.to_text(), "bc");
    }

    #[test]
    fn choice_backtracks_to_original_input() {
        let input = Input::new("abc");
        let d = PChar::new('d', Position::start());
        let failing = fail(ParserError::new("failed because...", input.clone()));
        let (c, rest) = choice(failing, pure(d)).parse_input(&input).into_first().unwrap();
        assert_eq!(c.value, 'd');
        assert_eq!(rest, input);

        let p = choice(string("abx"), string("abc"));
        let (matched, rest) = p.parse("abcd").into_first().unwrap();
        assert_eq!(to_text(&matched), "abc");
        assert_eq!(rest.to_text(), "d");
    }

    #[test]
    fn choice_reports_last_alternative() {
        let input = Input::new("abz");
        let res = choice(string("abc"), string("x")).parse_input(&input);
        assert_eq!(res.errors(), &[ParserError::new("'x'", input)][..]);
    }

    #[test]
    fn choices_tries_in_order() {
        let p = choices(vec![character('a'), character('b'), character('c')]);
        assert_eq!(p.parse("c").into_first().unwrap().0.value, 'c');
        assert_eq!(p.parse("d").errors()[0].expected(), "'c'");

        let none = choices(Vec::<Parser<PChar>>::new());
        assert_eq!(none.parse("a").errors()[0].expected(), "an alternative");
    }

    #[test]
    fn string_matches_prefix() {
        let (matched, rest) = string("he").parse("hell").into_first().unwrap();
        assert_eq!(to_text(&matched), "he");
        assert_eq!(rest.to_text(), "ll");

        let (matched, rest) = string("hello").parse("hello, world").into_first().unwrap();
        assert_eq!(to_text(&matched), "hello");
        assert_eq!(rest.to_text(), ", world");
    }

    #[test]
    fn string_fails_on_first_mismatch() {
        let input = Input::new("hell");
        assert_eq!(
            string("hello").parse_input(&input).errors(),
            &[ParserError::new("'o'", input.skip(4))][..]
        );

        let input = Input::new("help");
        assert_eq!(
            string("hello").parse_input(&input).errors(),
            &[ParserError::new("'l'", input.skip(3))][..]
        );
    }

    #[test]
    fn empty_string_consumes_nothing() {
        let input = Input::new("abc");
        assert_eq!(
            string("").parse_input(&input),
            ParseResult::success(Vec::new(), input)
        );
    }

    #[test]
    fn cons_prepends() {
        assert_eq!(cons(1, vec![2, 3]), vec![1, 2, 3]);
        assert_eq!(cons(1, Vec::new()), vec![1]);
    }

    #[test]
    fn optional_never_fails() {
        let (c, _) = optional(character('-')).parse("-1").into_first().unwrap();
        assert_eq!(c.map(|c| c.value), Some('-'));

        let input = Input::new("1");
        assert_eq!(
            optional(character('-')).parse_input(&input),
            ParseResult::success(None, input)
        );
    }

    #[test]
    fn separated_values() {
        let p = sep_by(digit(), character(','));
        let (ds, rest) = p.parse("1,2,3;").into_first().unwrap();
        assert_eq!(to_text(&ds), "123");
        assert_eq!(rest.to_text(), ";");

        let (ds, rest) = p.parse("1,2,").into_first().unwrap();
        assert_eq!(to_text(&ds), "12");
        assert_eq!(rest.to_text(), ",");

        let (ds, _) = p.parse("x").into_first().unwrap();
        assert!(ds.is_empty());

        assert!(sep_by1(digit(), character(',')).parse("x").is_faulted());
    }

    #[test]
    fn between_and_symbols() {
        let p = between(symbol("("), lexeme(digit()), symbol(")"));
        let (d, rest) = p.parse("(  7 )  ").into_first().unwrap();
        assert_eq!(d.value, '7');
        assert!(rest.is_empty());

        let (word, rest) = symbol("let").parse("let   x").into_first().unwrap();
        assert_eq!(to_text(&word), "let");
        assert_eq!(rest.to_text(), "x");
    }
}
