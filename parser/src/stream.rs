#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use alloc::sync::Arc;
use core::fmt;

/// Line and column of a character in the source text, both starting at 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Position of the character following `c`.
    pub fn next(&self, c: char) -> Self {
        let new_line = c == '\n';
        Self {
            line: if new_line { self.line + 1 } else { self.line },
            column: if new_line { 1 } else { self.column + 1 },
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A source character together with where it was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PChar {
    pub value: char,
    pub line: u32,
    pub column: u32,
}

impl PChar {
    pub fn new(value: char, position: Position) -> Self {
        Self {
            value,
            line: position.line,
            column: position.column,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

/// Where a parser stopped: on a character, or past the last one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Location {
    At(Position),
    EndOfInput,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::At(pos) => pos.fmt(f),
            Location::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Remaining input of a parse.
///
/// A view over a shared, immutable buffer of positioned characters. Slicing
/// never copies character data, so streams are cheap to clone and hand to
/// alternative branches.
#[derive(Clone)]
pub struct Input {
    chars: Arc<[PChar]>,
    start: usize,
    end: usize,
}

impl Input {
    pub fn new(text: &str) -> Self {
        let mut pos = Position::start();
        let chars = text
            .chars()
            .map(|c| {
                let pc = PChar::new(c, pos);
                pos = pos.next(c);
                pc
            })
            .collect::<Vec<_>>();
        let end = chars.len();
        Self {
            chars: chars.into(),
            start: 0,
            end,
        }
    }

    pub fn as_slice(&self) -> &[PChar] {
        &self.chars[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn first(&self) -> Option<PChar> {
        self.as_slice().first().copied()
    }

    /// First character and the stream after it.
    pub fn split_first(&self) -> Option<(PChar, Input)> {
        self.first().map(|c| (c, self.skip(1)))
    }

    /// Drops up to `n` characters from the front.
    pub fn skip(&self, n: usize) -> Input {
        Input {
            chars: self.chars.clone(),
            start: self.start.saturating_add(n).min(self.end),
            end: self.end,
        }
    }

    /// Keeps at most the first `n` characters.
    pub fn take(&self, n: usize) -> Input {
        Input {
            chars: self.chars.clone(),
            start: self.start,
            end: self.start.saturating_add(n).min(self.end),
        }
    }

    pub fn position(&self) -> Option<Position> {
        self.first().map(|c| c.position())
    }

    pub fn location(&self) -> Location {
        self.position()
            .map(Location::At)
            .unwrap_or(Location::EndOfInput)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PChar> + '_ {
        self.as_slice().iter()
    }

    pub fn to_text(&self) -> String {
        to_text(self.as_slice())
    }

    /// Number of characters consumed between `self` and `rest`, where `rest`
    /// is a remainder produced by parsing `self`.
    pub fn consumed_by(&self, rest: &Input) -> usize {
        self.len().saturating_sub(rest.len())
    }
}

/// Reconstructs the literal text of a run of positioned characters.
pub fn to_text(chars: &[PChar]) -> String {
    chars.iter().map(|c| c.value).collect()
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::new(text)
    }
}

impl From<&String> for Input {
    fn from(text: &String) -> Self {
        Input::new(text)
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Input {}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("text", &self.to_text())
            .field("location", &self.location())
            .finish()
    }
}
