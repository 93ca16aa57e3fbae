//! The 81-cell puzzle type and its canonical string representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{Digit, Position};

/// The character marking an unknown cell in the string representation.
pub const PLACEHOLDER: char = '.';

/// An error produced when parsing a puzzle string.
///
/// The two variants correspond to the two ways a puzzle string can be rejected,
/// so callers can report them separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParsePuzzleError {
    /// The input is not exactly 81 characters long.
    #[display("expected 81 characters, found {found}")]
    InvalidLength {
        /// Number of characters found in the input.
        found: usize,
    },
    /// The input contains a character other than `.` and `1`-`9`.
    #[display("invalid character {found:?} at index {index}")]
    InvalidCharacter {
        /// Index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// A 9x9 sudoku puzzle.
///
/// A puzzle is an ordered sequence of 81 cells in row-major order, each either
/// a fixed [`Digit`] or unknown. The canonical external representation is an
/// 81-character string with `.` for unknown cells and `1`-`9` for digits;
/// [`FromStr`] and [`Display`] convert between the two.
///
/// Puzzle values are immutable from the caller's perspective: every operation
/// that "changes" a cell, such as [`with_placement`](Self::with_placement),
/// returns a new value and leaves the input untouched.
///
/// # Examples
///
/// ```
/// use gridpost_core::{Digit, Position, Puzzle};
///
/// let puzzle: Puzzle = ".".repeat(81).parse().unwrap();
/// assert!(!puzzle.is_complete());
///
/// let updated = puzzle.with_placement(Position::new(0, 0), Digit::D5);
/// assert_eq!(updated.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(puzzle.get(Position::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    cells: [Option<Digit>; 81],
}

impl Puzzle {
    /// Returns `true` iff `input` is a syntactically well-formed puzzle string:
    /// exactly 81 characters, each either `.` or a digit `1`-`9`.
    ///
    /// This is a pure predicate over the string form; use [`FromStr`] to obtain
    /// the parsed puzzle and the reason for a rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpost_core::Puzzle;
    ///
    /// assert!(Puzzle::validate(&".".repeat(81)));
    /// assert!(!Puzzle::validate(&".".repeat(80)));
    /// assert!(!Puzzle::validate(&"0".repeat(81)));
    /// ```
    #[must_use]
    pub fn validate(input: &str) -> bool {
        input.parse::<Self>().is_ok()
    }

    /// Returns the digit at `pos`, or `None` if the cell is unknown.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns a copy of this puzzle with the cell at `pos` set to `digit`.
    ///
    /// The receiver is not modified. Any previous content of the cell is
    /// overwritten.
    #[must_use]
    pub fn with_placement(self, pos: Position, digit: Digit) -> Self {
        let mut cells = self.cells;
        cells[pos.index()] = Some(digit);
        Self { cells }
    }

    /// Returns `true` if every cell holds a digit.
    ///
    /// Completeness says nothing about row/column/region consistency.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the positions of all unknown cells, in
    /// row-major order.
    pub fn unknown_positions(&self) -> impl Iterator<Item = Position> {
        let cells = self.cells;
        Position::all().filter(move |pos| cells[pos.index()].is_none())
    }

    /// Returns the number of unknown cells.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != 81 {
            return Err(ParsePuzzleError::InvalidLength { found });
        }

        let mut cells = [None; 81];
        for (index, c) in s.chars().enumerate() {
            if c == PLACEHOLDER {
                continue;
            }
            match Digit::from_char(c) {
                Some(digit) => cells[index] = Some(digit),
                None => return Err(ParsePuzzleError::InvalidCharacter { index, found: c }),
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}
