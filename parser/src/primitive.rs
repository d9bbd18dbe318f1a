#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::combinator::many;
use crate::error::ParserError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::stream::PChar;

/// Any single character.
pub fn item() -> Parser<PChar> {
    Parser::new(|input| match input.split_first() {
        Some((c, rest)) => ParseResult::success(c, rest),
        None => ParseResult::fault(ParserError::new("any character", input.clone())),
    })
}

/// A single character accepted by `pred`. Fails with `label` at the rejected
/// character, or at the end of input.
pub fn satisfy(
    pred: impl Fn(char) -> bool + Send + Sync + 'static,
    label: impl Into<String>,
) -> Parser<PChar> {
    let label = label.into();
    Parser::new(move |input| match input.split_first() {
        Some((c, rest)) if pred(c.value) => ParseResult::success(c, rest),
        _ => ParseResult::fault(ParserError::new(label.clone(), input.clone())),
    })
}

pub fn character(c: char) -> Parser<PChar> {
    satisfy(move |v| v == c, format!("'{}'", c))
}

pub fn digit() -> Parser<PChar> {
    satisfy(|c| c.is_ascii_digit(), "digit")
}

pub fn letter() -> Parser<PChar> {
    satisfy(char::is_alphabetic, "letter")
}

pub fn letter_or_digit() -> Parser<PChar> {
    satisfy(|c| c.is_alphanumeric(), "letter or digit")
}

/// One whitespace character.
pub fn space() -> Parser<PChar> {
    satisfy(char::is_whitespace, "whitespace")
}

/// Zero or more whitespace characters. Never fails.
pub fn whitespace() -> Parser<Vec<PChar>> {
    many(space())
}

/// Any character from `chars`.
pub fn one_of(chars: &str) -> Parser<PChar> {
    let set = chars.chars().collect::<Vec<_>>();
    let label = set
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(" or ");
    satisfy(move |c| set.contains(&c), label)
}

/// Any character not in `chars`.
pub fn none_of(chars: &str) -> Parser<PChar> {
    let set = chars.chars().collect::<Vec<_>>();
    let label = format!("any character except {:?}", chars);
    satisfy(move |c| !set.contains(&c), label)
}

/// Succeeds only when no input remains.
pub fn end() -> Parser<()> {
    Parser::new(|input| {
        if input.is_empty() {
            ParseResult::success((), input.clone())
        } else {
            ParseResult::fault(ParserError::new("end of input", input.clone()))
        }
    })
}

/// An optionally negative decimal integer.
pub fn integer() -> Parser<i64> {
    character('-')
        .optional()
        .then(digit().many1())
        .try_map(|(sign, digits)| {
            digits
                .iter()
                .try_fold(0i64, |acc, d| {
                    let d = i64::from(d.value.to_digit(10).unwrap_or(0));
                    let acc = acc.checked_mul(10)?;
                    match sign {
                        Some(_) => acc.checked_sub(d),
                        None => acc.checked_add(d),
                    }
                })
                .ok_or("integer in range")
        })
}
