use crate::json::JsonValue;
use crate::json_parser::{json_parser, ParserOptions};
use lite_parsec::ParseFailure;

pub fn parse_json(input: &str) -> Result<JsonValue, ParseFailure> {
    parse_json_with_options(input, Default::default())
}

pub fn parse_json_with_options(
    input: &str,
    options: ParserOptions,
) -> Result<JsonValue, ParseFailure> {
    json_parser(options)
        .parse(input)
        .into_first()
        .map(|(value, _)| value)
}
