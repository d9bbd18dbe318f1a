#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::{furthest, ParseFailure, ParserError};
use crate::stream::Input;

/// Outcome of running a parser over an input stream.
///
/// `Success` holds every way the parser matched, each with the input left
/// over. Neither vector is ever empty: no match at all is always `Faulted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult<T> {
    Faulted(Vec<ParserError>),
    Success(Vec<(T, Input)>),
}

impl<T> ParseResult<T> {
    pub fn success(value: T, rest: Input) -> Self {
        ParseResult::Success(vec![(value, rest)])
    }

    pub fn fault(error: ParserError) -> Self {
        ParseResult::Faulted(vec![error])
    }

    /// Joins the outcomes of several branches explored from one input.
    ///
    /// Any success wins. When every branch faulted, the errors furthest into
    /// the input are kept.
    pub fn merge(values: Vec<(T, Input)>, errors: Vec<ParserError>) -> Self {
        if values.is_empty() {
            ParseResult::Faulted(furthest(errors))
        } else {
            ParseResult::Success(values)
        }
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self, ParseResult::Faulted(_))
    }

    pub fn errors(&self) -> &[ParserError] {
        match self {
            ParseResult::Faulted(errors) => errors,
            ParseResult::Success(_) => &[],
        }
    }

    pub fn values(&self) -> &[(T, Input)] {
        match self {
            ParseResult::Faulted(_) => &[],
            ParseResult::Success(values) => values,
        }
    }

    pub fn into_values(self) -> Vec<(T, Input)> {
        match self {
            ParseResult::Faulted(_) => Vec::new(),
            ParseResult::Success(values) => values,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ParseResult<U> {
        match self {
            ParseResult::Faulted(errors) => ParseResult::Faulted(errors),
            ParseResult::Success(values) => ParseResult::Success(
                values
                    .into_iter()
                    .map(|(value, rest)| (f(value), rest))
                    .collect(),
            ),
        }
    }

    /// All successful parses, or the errors as a `ParseFailure`.
    pub fn into_result(self) -> Result<Vec<(T, Input)>, ParseFailure> {
        match self {
            ParseResult::Faulted(errors) => Err(ParseFailure::new(errors)),
            ParseResult::Success(values) => Ok(values),
        }
    }

    /// The first successful parse. Grammars without ambiguity only ever
    /// produce one.
    pub fn into_first(self) -> Result<(T, Input), ParseFailure> {
        self.into_result()?
            .into_iter()
            .next()
            .ok_or_else(|| ParseFailure::new(Vec::new()))
    }
}
