//! Monadic parser combinators over position-tracked character streams.
//!
//! Parsers are plain values of type [`Parser<T>`]: pure functions from an
//! [`Input`] to a [`ParseResult`]. Small parsers such as [`character`] and
//! [`digit`] are composed with [`Parser::bind`] and the combinators built on
//! it into parsers for whole grammars.
//!
//! ```
//! use lite_parsec::{character, cons, digit, many, to_text};
//!
//! let list = character('[').ignore_then(digit()).bind(|d| {
//!     many(character(',').ignore_then(digit()))
//!         .then_ignore(character(']'))
//!         .map(move |ds| cons(d, ds))
//! });
//!
//! let (digits, _) = list.parse("[1,2,3]").into_first().unwrap();
//! assert_eq!(to_text(&digits), "123");
//!
//! let failed = list.parse("[1,2*");
//! assert_eq!(failed.errors()[0].to_string(), "expected ']' at line 1, column 5");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[doc(hidden)]
pub use paste;

pub use crate::combinator::{
    between, choice, choices, cons, lexeme, many, many1, optional, sep_by, sep_by1, string,
    symbol,
};
pub use crate::error::{ParseFailure, ParserError};
pub use crate::parser::{defer, fail, fail_with, pure, Parser};
pub use crate::primitive::{
    character, digit, end, integer, item, letter, letter_or_digit, none_of, one_of, satisfy,
    space, whitespace,
};
pub use crate::result::ParseResult;
pub use crate::stream::{to_text, Input, Location, PChar, Position};

pub mod combinator;
pub mod error;
pub mod parser;
pub mod primitive;
pub mod result;
pub mod stream;

mod macros;
