#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::stream::{Input, Location, Position};

/// A single unmet expectation: what the parser wanted and the input it was
/// looking at when it gave up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} at {}", .input.location())]
pub struct ParserError {
    pub expected: String,
    pub input: Input,
}

impl ParserError {
    pub fn new(expected: impl Into<String>, input: Input) -> Self {
        Self {
            expected: expected.into(),
            input,
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn position(&self) -> Option<Position> {
        self.input.position()
    }

    pub fn location(&self) -> Location {
        self.input.location()
    }

    /// Whether this error happened deeper into the source than `other`.
    ///
    /// Both errors must come from the same parse; less remaining input means
    /// further along.
    pub fn is_further_than(&self, other: &ParserError) -> bool {
        self.input.len() < other.input.len()
    }
}

/// Keeps only the errors sitting at the furthest failure point, in order.
pub fn furthest(errors: Vec<ParserError>) -> Vec<ParserError> {
    let min = match errors.iter().map(|e| e.input.len()).min() {
        Some(min) => min,
        None => return errors,
    };
    errors.into_iter().filter(|e| e.input.len() == min).collect()
}

/// A faulted parse turned into an error value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.errors))]
pub struct ParseFailure {
    pub errors: Vec<ParserError>,
}

impl ParseFailure {
    pub fn new(errors: Vec<ParserError>) -> Self {
        Self { errors }
    }

    /// The error deepest into the input; ties go to the first reported.
    pub fn furthest(&self) -> Option<&ParserError> {
        furthest_of(&self.errors)
    }
}

fn furthest_of(errors: &[ParserError]) -> Option<&ParserError> {
    errors.iter().fold(None, |best, e| match best {
        Some(b) if !e.is_further_than(b) => Some(b),
        _ => Some(e),
    })
}

fn describe(errors: &[ParserError]) -> String {
    match furthest_of(errors) {
        Some(e) if errors.len() > 1 => alloc::format!("{} ({} more)", e, errors.len() - 1),
        Some(e) => alloc::format!("{}", e),
        None => String::from("parse failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_expectation_with_location() {
        let input = Input::new("[1,2*");
        let err = ParserError::new("']'", input.skip(4));
        assert_eq!(err.to_string(), "expected ']' at line 1, column 5");

        let err = ParserError::new("digit", input.skip(5));
        assert_eq!(err.to_string(), "expected digit at end of input");
    }

    #[test]
    fn fewer_remaining_characters_is_further() {
        let input = Input::new("abcd");
        let near = ParserError::new("x", input.skip(1));
        let far = ParserError::new("y", input.skip(3));
        assert!(far.is_further_than(&near));
        assert!(!near.is_further_than(&far));
        assert!(!near.is_further_than(&near));
    }

    #[test]
    fn keeps_all_errors_tied_at_furthest_point() {
        let input = Input::new("abcd");
        let errors = vec![
            ParserError::new("a", input.skip(1)),
            ParserError::new("b", input.skip(2)),
            ParserError::new("c", input.skip(2)),
        ];
        let kept = furthest(errors);
        assert_eq!(
            kept.iter().map(|e| e.expected()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }

    #[test]
    fn failure_reports_furthest_error() {
        let input = Input::new("abcd");
        let failure = ParseFailure::new(vec![
            ParserError::new("'x'", input.skip(1)),
            ParserError::new("'y'", input.skip(3)),
        ]);
        assert_eq!(failure.furthest().unwrap().expected(), "'y'");
        assert_eq!(
            failure.to_string(),
            "expected 'y' at line 1, column 4 (1 more)"
        );
    }
}
