#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use alloc::sync::Arc;

use crate::combinator;
use crate::error::{ParseFailure, ParserError};
use crate::result::ParseResult;
use crate::stream::Input;

type ParseFn<T> = Arc<dyn Fn(&Input) -> ParseResult<T> + Send + Sync>;

/// A parser producing values of type `T`.
///
/// A parser is a pure function from an input stream to a [`ParseResult`]. It
/// holds nothing but what it was built from, so cloning is cheap and a single
/// parser can run on any number of inputs, from any number of threads.
pub struct Parser<T> {
    run: ParseFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Parser<T> {
    pub fn new(f: impl Fn(&Input) -> ParseResult<T> + Send + Sync + 'static) -> Self {
        Parser { run: Arc::new(f) }
    }

    /// Runs the parser over `text` from its first character.
    pub fn parse(&self, text: &str) -> ParseResult<T> {
        let input = Input::new(text);
        tracing::trace!(len = input.len(), "parse started");
        let result = self.parse_input(&input);
        if let ParseResult::Faulted(errors) = result {
            let failure = ParseFailure::new(errors);
            if let Some(error) = failure.furthest() {
                tracing::debug!(errors = failure.errors.len(), furthest = %error, "parse faulted");
            }
            return ParseResult::Faulted(failure.errors);
        }
        result
    }

    pub fn parse_input(&self, input: &Input) -> ParseResult<T> {
        (self.run)(input)
    }

    /// Runs `self`, then the parser `f` builds from each value, on what
    /// `self` left over.
    ///
    /// Every success of `self` is followed, and the successes of all
    /// continuations are collected. A fault of `self` is returned as is.
    pub fn bind<U: 'static>(
        self,
        f: impl Fn(T) -> Parser<U> + Send + Sync + 'static,
    ) -> Parser<U> {
        Parser::new(move |input| match self.parse_input(input) {
            ParseResult::Faulted(errors) => ParseResult::Faulted(errors),
            ParseResult::Success(pairs) => {
                let mut values = Vec::new();
                let mut errors = Vec::new();
                for (value, rest) in pairs {
                    match f(value).parse_input(&rest) {
                        ParseResult::Success(more) => values.extend(more),
                        ParseResult::Faulted(more) => errors.extend(more),
                    }
                }
                ParseResult::merge(values, errors)
            }
        })
    }

    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Parser<U> {
        Parser::new(move |input| self.parse_input(input).map(&f))
    }

    /// Like `map`, but `f` may reject a value. Rejections fault at the input
    /// this parser started from, with `f`'s error as the expected label.
    pub fn try_map<U: 'static, E: Into<String>>(
        self,
        f: impl Fn(T) -> Result<U, E> + Send + Sync + 'static,
    ) -> Parser<U> {
        Parser::new(move |input| match self.parse_input(input) {
            ParseResult::Faulted(errors) => ParseResult::Faulted(errors),
            ParseResult::Success(pairs) => {
                let mut values = Vec::new();
                let mut errors = Vec::new();
                for (value, rest) in pairs {
                    match f(value) {
                        Ok(value) => values.push((value, rest)),
                        Err(expected) => errors.push(ParserError::new(expected, input.clone())),
                    }
                }
                ParseResult::merge(values, errors)
            }
        })
    }

    pub fn ignore_then<U: 'static>(self, next: Parser<U>) -> Parser<U> {
        self.bind(move |_| next.clone())
    }

    /// Tries `self`, falling back to `other` from the same input.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        combinator::choice(self, other)
    }

    /// Renames what this parser expects when it fails without consuming
    /// anything. Failures further in keep their own labels.
    pub fn labelled(self, label: impl Into<String>) -> Parser<T> {
        let label = label.into();
        Parser::new(move |input| match self.parse_input(input) {
            ParseResult::Faulted(errors) => {
                let mut errors = errors
                    .into_iter()
                    .map(|e| {
                        if e.input.len() == input.len() {
                            ParserError::new(label.clone(), e.input)
                        } else {
                            e
                        }
                    })
                    .collect::<Vec<_>>();
                errors.dedup();
                ParseResult::Faulted(errors)
            }
            success => success,
        })
    }

    pub fn many(self) -> Parser<Vec<T>> {
        combinator::many(self)
    }

    pub fn many1(self) -> Parser<Vec<T>> {
        combinator::many1(self)
    }

    pub fn optional(self) -> Parser<Option<T>> {
        combinator::optional(self)
    }

    pub fn separated_by<U: 'static>(self, sep: Parser<U>) -> Parser<Vec<T>> {
        combinator::sep_by(self, sep)
    }
}

impl<T: Clone + Send + Sync + 'static> Parser<T> {
    /// Runs `self` then `next`, keeping both values.
    pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<(T, U)> {
        self.bind(move |a| next.clone().map(move |b| (a.clone(), b)))
    }

    pub fn then_ignore<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        self.bind(move |a| next.clone().map(move |_| a.clone()))
    }

    pub fn delimited_by<A: 'static, B: 'static>(
        self,
        open: Parser<A>,
        close: Parser<B>,
    ) -> Parser<T> {
        combinator::between(open, self, close)
    }

    /// Skips whitespace after the value.
    pub fn padded(self) -> Parser<T> {
        combinator::lexeme(self)
    }
}

/// Succeeds with `value` without consuming anything.
pub fn pure<T: Clone + Send + Sync + 'static>(value: T) -> Parser<T> {
    Parser::new(move |input| ParseResult::success(value.clone(), input.clone()))
}

/// Always faults with `error`.
pub fn fail<T: 'static>(error: ParserError) -> Parser<T> {
    Parser::new(move |_| ParseResult::fault(error.clone()))
}

/// Always faults at the current input, expecting `label`.
pub fn fail_with<T: 'static>(label: impl Into<String>) -> Parser<T> {
    let label = label.into();
    Parser::new(move |input| {
        ParseResult::fault(ParserError::new(label.clone(), input.clone()))
    })
}

/// Builds the parser only when it runs. Needed for recursive grammars, where
/// a rule refers to itself.
pub fn defer<T: 'static>(f: impl Fn() -> Parser<T> + Send + Sync + 'static) -> Parser<T> {
    Parser::new(move |input| f().parse_input(input))
}
