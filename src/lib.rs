#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub use crate::json::{JsonObject, JsonValue};
pub use crate::json_parser::{json_parser, ParserOptions};
pub use crate::parse::{parse_json, parse_json_with_options};
pub use lite_parsec::ParseFailure;

pub mod json;
pub mod json_parser;

mod parse;
