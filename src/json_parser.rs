#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

use crate::json::JsonValue;
use lite_parsec::{
    character, cons, defer, digit, end, fail_with, literals, many, many1, one_of, optional, pure,
    satisfy, sep_by1, string, to_text, PChar, ParseResult, Parser,
};

literals! {
    pub whitespace_char => '\u{0020}' | '\u{000D}' | '\u{000A}' | '\u{0009}';
    pub sign_char => '+' | '-';
    pub exponent_char => 'E' | 'e';
    pub one_to_nine_char => '1' ..= '9';
    pub hex_char => '0' ..= '9' | 'a' ..= 'f' | 'A' ..= 'F';
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    pub max_nest_level: Option<u32>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_nest_level: Some(100),
        }
    }
}

impl ParserOptions {
    /// Level of the values inside a container opened at `level`, or `None`
    /// when opening it would exceed the limit.
    fn nest(&self, level: u32) -> Option<u32> {
        if Some(level) == self.max_nest_level {
            None
        } else {
            Some(level + 1)
        }
    }
}

/// First alternative that succeeds, otherwise the failures that got furthest.
///
/// Unlike `choice`, a failure deep inside an early alternative is not hidden
/// by a later alternative failing right away.
fn alternatives<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |input| {
        let mut errors = Vec::new();
        for p in &parsers {
            match p.parse_input(input) {
                ParseResult::Faulted(more) => errors.extend(more),
                success => return success,
            }
        }
        ParseResult::merge(Vec::new(), errors)
    })
}

fn whitespace() -> Parser<()> {
    many(whitespace_char()).map(|_| ())
}

fn token(c: char) -> Parser<PChar> {
    character(c).then_ignore(whitespace())
}

fn number() -> Parser<f64> {
    let integer = character('0')
        .map(|zero| vec![zero])
        .or(one_to_nine_char().bind(|first| many(digit()).map(move |rest| cons(first, rest))))
        .labelled("digit");
    let fraction = character('.')
        .then(many1(digit()))
        .map(|(dot, digits)| cons(dot, digits));
    let exponent = exponent_char()
        .then(optional(sign_char()))
        .then(many1(digit()))
        .map(|((e, sign), digits)| {
            let mut chars = vec![e];
            chars.extend(sign);
            chars.extend(digits);
            chars
        });

    optional(character('-'))
        .then(integer)
        .then(optional(fraction))
        .then(optional(exponent))
        .try_map(|(((sign, integer), fraction), exponent)| {
            let mut chars = sign.into_iter().collect::<Vec<_>>();
            chars.extend(integer);
            chars.extend(fraction.into_iter().flatten());
            chars.extend(exponent.into_iter().flatten());
            to_text(&chars).parse::<f64>().map_err(|_| "number")
        })
}

/// Four hex digits as a code unit.
fn hex4() -> Parser<u32> {
    (0..4).fold(pure(0u32), |acc, _| {
        acc.bind(|n| hex_char().map(move |h| n * 16 + h.value.to_digit(16).unwrap_or(0)))
    })
}

fn unicode_escape() -> Parser<char> {
    character('u').ignore_then(hex4()).bind(|high| {
        if (0xD800..0xDC00).contains(&high) {
            string("\\u").ignore_then(hex4()).try_map(move |low| {
                if (0xDC00..0xE000).contains(&low) {
                    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                        .ok_or("unicode escape")
                } else {
                    Err("unicode escape")
                }
            })
        } else {
            match char::from_u32(high) {
                Some(c) => pure(c),
                None => fail_with("unicode escape"),
            }
        }
    })
}

fn escape() -> Parser<char> {
    let simple = one_of("\"\\/bfnrt").map(|c| match c.value {
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    });
    character('\\').ignore_then(simple.or(unicode_escape()).labelled("escape sequence"))
}

fn json_string() -> Parser<String> {
    let unescaped = satisfy(
        |c| c != '"' && c != '\\' && c >= '\u{0020}',
        "string character",
    )
    .map(|c| c.value);
    // `many` backtracks out of a broken escape, so it is retried next to the
    // closing quote and its deeper error wins.
    let close = alternatives(vec![character('"').map(|_| ()), escape().map(|_| ())]);
    character('"')
        .ignore_then(many(unescaped.or(escape())))
        .then_ignore(close)
        .map(|chars| chars.into_iter().collect())
}

/// Contents of a container after its opening bracket, up to and including
/// `close`. Empty containers are matched first so that a failure inside the
/// first item is reported rather than a missing `close`.
fn items<T>(item: Parser<T>, close: char) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    token(close)
        .map(|_| Vec::new())
        .or(sep_by1(item, token(',')).then_ignore(character(close)))
}

fn array(options: ParserOptions, level: u32) -> Parser<JsonValue> {
    let open = token('[');
    match options.nest(level) {
        None => open.ignore_then(fail_with("nesting within limit")),
        Some(inner) => {
            let element = defer(move || value(options.clone(), inner));
            open.ignore_then(items(element, ']')).map(JsonValue::Array)
        }
    }
}

fn object(options: ParserOptions, level: u32) -> Parser<JsonValue> {
    let open = token('{');
    match options.nest(level) {
        None => open.ignore_then(fail_with("nesting within limit")),
        Some(inner) => {
            let member = json_string()
                .then_ignore(whitespace())
                .then_ignore(token(':'))
                .then(defer(move || value(options.clone(), inner)));
            open.ignore_then(items(member, '}')).map(JsonValue::Object)
        }
    }
}

/// A value and the whitespace after it.
fn value(options: ParserOptions, level: u32) -> Parser<JsonValue> {
    alternatives(vec![
        object(options.clone(), level),
        array(options, level),
        json_string().map(JsonValue::String),
        number().map(JsonValue::Number),
        string("true").map(|_| JsonValue::Boolean(true)),
        string("false").map(|_| JsonValue::Boolean(false)),
        string("null").map(|_| JsonValue::Null),
    ])
    .labelled("value")
    .then_ignore(whitespace())
}

/// A complete JSON document: one value, surrounded by optional whitespace.
pub fn json_parser(options: ParserOptions) -> Parser<JsonValue> {
    whitespace()
        .ignore_then(value(options, 0))
        .then_ignore(end())
}
