//! Core data structures for the gridpost sudoku service.
//!
//! This crate provides the puzzle data model shared by the solver and the HTTP
//! boundary:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Sets of digits, used as per-cell candidate sets
//! - [`position`]: Board position types and row-major indexing
//! - [`puzzle`]: The 81-cell [`Puzzle`] type, its canonical 81-character string
//!   representation, and the format validator
//!
//! # Examples
//!
//! ```
//! use gridpost_core::{Digit, Position, Puzzle};
//!
//! let puzzle: Puzzle =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!         .parse()
//!         .unwrap();
//!
//! assert_eq!(puzzle.get(Position::new(0, 0)), Some(Digit::D1));
//! assert_eq!(puzzle.get(Position::new(1, 0)), None);
//! ```

pub mod digit;
pub mod digit_set;
pub mod position;
pub mod puzzle;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
    puzzle::{PLACEHOLDER, ParsePuzzleError, Puzzle},
};
