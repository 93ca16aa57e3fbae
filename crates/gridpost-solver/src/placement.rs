//! Placement legality checks.
//!
//! Each check answers the question: after hypothetically placing a digit at a
//! position, does the affected row, column, or region contain a duplicate? The
//! three axes are checked independently so callers can report exactly which
//! constraints a placement violates.

use gridpost_core::{Digit, DigitSet, Position, Puzzle};

/// The outcome of checking a placement against all three axes.
///
/// Each flag is `true` when the corresponding axis check *failed*. The overall
/// placement is legal iff no flag is set.
///
/// # Examples
///
/// ```
/// use gridpost_core::{Digit, Position, Puzzle};
/// use gridpost_solver::check_placement;
///
/// let puzzle: Puzzle = ".".repeat(81).parse().unwrap();
/// let conflicts = check_placement(&puzzle, Position::new(0, 0), Digit::D1);
/// assert!(conflicts.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflicts {
    /// The row check failed.
    pub row: bool,
    /// The column check failed.
    pub column: bool,
    /// The region check failed.
    pub region: bool,
}

impl Conflicts {
    /// Returns `true` if the placement passed all three checks.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !(self.row || self.column || self.region)
    }
}

/// Returns `true` if a slice of cells contains no duplicate digit.
///
/// Unknown cells never count as duplicates.
fn no_duplicates(cells: impl IntoIterator<Item = Option<Digit>>) -> bool {
    let mut seen = DigitSet::EMPTY;
    for cell in cells {
        if let Some(digit) = cell {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
    }
    true
}

/// Returns `true` if placing `digit` at `pos` leaves the row free of duplicates.
///
/// The placement overwrites any existing content of the cell, so re-asserting a
/// cell's current digit is legal. A duplicate elsewhere in the row, even one not
/// involving `digit`, also fails the check.
#[must_use]
pub fn row_placement_ok(puzzle: &Puzzle, pos: Position, digit: Digit) -> bool {
    let grid = puzzle.with_placement(pos, digit);
    no_duplicates((0..9).map(|x| grid.get(Position::new(x, pos.y()))))
}

/// Returns `true` if placing `digit` at `pos` leaves the column free of
/// duplicates.
#[must_use]
pub fn column_placement_ok(puzzle: &Puzzle, pos: Position, digit: Digit) -> bool {
    let grid = puzzle.with_placement(pos, digit);
    no_duplicates((0..9).map(|y| grid.get(Position::new(pos.x(), y))))
}

/// Returns `true` if placing `digit` at `pos` leaves the 3x3 region free of
/// duplicates.
#[must_use]
pub fn region_placement_ok(puzzle: &Puzzle, pos: Position, digit: Digit) -> bool {
    let grid = puzzle.with_placement(pos, digit);
    let origin = pos.region_origin();
    let cells = (0..3).flat_map(|dy| {
        (0..3).map(move |dx| Position::new(origin.x() + dx, origin.y() + dy))
    });
    no_duplicates(cells.map(|p| grid.get(p)))
}

/// Checks a placement against all three axes.
///
/// The result reports each failing axis independently; see [`Conflicts`].
#[must_use]
pub fn check_placement(puzzle: &Puzzle, pos: Position, digit: Digit) -> Conflicts {
    Conflicts {
        row: !row_placement_ok(puzzle, pos, digit),
        column: !column_placement_ok(puzzle, pos, digit),
        region: !region_placement_ok(puzzle, pos, digit),
    }
}

#[cfg(test)]
mod tests {
    use gridpost_core::Digit;
    use proptest::prelude::*;

    use super::*;
    use crate::fixtures::puzzle;

    // 1-indexed (row, column), as the HTTP coordinate format counts them.
    fn at(row: u8, column: u8) -> Position {
        Position::new(column - 1, row - 1)
    }

    #[test]
    fn test_valid_row_placements() {
        assert!(row_placement_ok(&puzzle(0), at(1, 2), Digit::D3));
        assert!(row_placement_ok(&puzzle(1), at(9, 8), Digit::D4));
        assert!(row_placement_ok(&puzzle(2), at(3, 2), Digit::D9));
        assert!(row_placement_ok(&puzzle(3), at(5, 1), Digit::D3));
        assert!(row_placement_ok(&puzzle(4), at(9, 7), Digit::D6));
    }

    #[test]
    fn test_invalid_row_placements() {
        // The proposed digit already appears elsewhere in the row
        assert!(!row_placement_ok(&puzzle(0), at(1, 2), Digit::D2));
        assert!(!row_placement_ok(&puzzle(1), at(1, 9), Digit::D5));
        assert!(!row_placement_ok(&puzzle(2), at(3, 2), Digit::D1));
        assert!(!row_placement_ok(&puzzle(3), at(5, 1), Digit::D6));
        assert!(!row_placement_ok(&puzzle(4), at(8, 2), Digit::D6));
    }

    #[test]
    fn test_valid_column_placements() {
        assert!(column_placement_ok(&puzzle(0), at(1, 2), Digit::D3));
        assert!(column_placement_ok(&puzzle(1), at(2, 8), Digit::D1));
        assert!(column_placement_ok(&puzzle(2), at(2, 3), Digit::D3));
        assert!(column_placement_ok(&puzzle(3), at(3, 4), Digit::D3));
        assert!(column_placement_ok(&puzzle(4), at(6, 7), Digit::D9));
    }

    #[test]
    fn test_invalid_column_placements() {
        assert!(!column_placement_ok(&puzzle(0), at(1, 2), Digit::D9));
        assert!(!column_placement_ok(&puzzle(1), at(2, 8), Digit::D6));
        assert!(!column_placement_ok(&puzzle(2), at(2, 3), Digit::D9));
        assert!(!column_placement_ok(&puzzle(3), at(3, 4), Digit::D6));
        assert!(!column_placement_ok(&puzzle(4), at(6, 7), Digit::D2));
    }

    #[test]
    fn test_valid_region_placements() {
        assert!(region_placement_ok(&puzzle(0), at(1, 2), Digit::D3));
        assert!(region_placement_ok(&puzzle(1), at(1, 9), Digit::D4));
        assert!(region_placement_ok(&puzzle(2), at(3, 2), Digit::D1));
        assert!(region_placement_ok(&puzzle(3), at(7, 3), Digit::D4));
        assert!(region_placement_ok(&puzzle(4), at(5, 4), Digit::D3));
    }

    #[test]
    fn test_invalid_region_placements() {
        assert!(!region_placement_ok(&puzzle(0), at(6, 6), Digit::D1));
        assert!(!region_placement_ok(&puzzle(1), at(8, 8), Digit::D3));
        assert!(!region_placement_ok(&puzzle(2), at(5, 8), Digit::D9));
        assert!(!region_placement_ok(&puzzle(3), at(7, 3), Digit::D6));
        assert!(!region_placement_ok(&puzzle(4), at(5, 4), Digit::D5));
    }

    #[test]
    fn test_placing_over_same_digit_is_legal() {
        // Overwriting a cell with the digit it already holds cannot conflict
        // with itself.
        let puzzle = puzzle(0);
        let pos = at(1, 1);
        assert_eq!(puzzle.get(pos), Some(Digit::D1));
        assert!(check_placement(&puzzle, pos, Digit::D1).is_valid());
    }

    #[test]
    fn test_conflicts_aggregation() {
        // On the first fixture, 6 at I9 conflicts with the row only,
        // 4 with row and column, and 7 with all three axes.
        let puzzle = puzzle(0);
        let pos = at(9, 9);

        assert_eq!(
            check_placement(&puzzle, pos, Digit::D6),
            Conflicts {
                row: true,
                column: false,
                region: false
            }
        );
        assert_eq!(
            check_placement(&puzzle, pos, Digit::D4),
            Conflicts {
                row: true,
                column: true,
                region: false
            }
        );
        assert_eq!(
            check_placement(&puzzle, pos, Digit::D7),
            Conflicts {
                row: true,
                column: true,
                region: true
            }
        );
    }

    proptest! {
        #[test]
        fn prop_row_check_ignores_cells_outside_the_row(
            y in 0_u8..9,
            x in 0_u8..9,
            digit_value in 1_u8..=9,
            other_index in 0_usize..81,
            other_value in 1_u8..=9,
        ) {
            let puzzle = puzzle(0);
            let pos = Position::new(x, y);
            let digit = Digit::from_value(digit_value);

            let other = Position::from_index(other_index);
            prop_assume!(other.y() != y);

            let mutated = puzzle.with_placement(other, Digit::from_value(other_value));
            prop_assert_eq!(
                row_placement_ok(&puzzle, pos, digit),
                row_placement_ok(&mutated, pos, digit),
            );
        }

        #[test]
        fn prop_column_check_ignores_cells_outside_the_column(
            y in 0_u8..9,
            x in 0_u8..9,
            digit_value in 1_u8..=9,
            other_index in 0_usize..81,
            other_value in 1_u8..=9,
        ) {
            let puzzle = puzzle(0);
            let pos = Position::new(x, y);
            let digit = Digit::from_value(digit_value);

            let other = Position::from_index(other_index);
            prop_assume!(other.x() != x);

            let mutated = puzzle.with_placement(other, Digit::from_value(other_value));
            prop_assert_eq!(
                column_placement_ok(&puzzle, pos, digit),
                column_placement_ok(&mutated, pos, digit),
            );
        }

        #[test]
        fn prop_region_check_ignores_cells_outside_the_region(
            y in 0_u8..9,
            x in 0_u8..9,
            digit_value in 1_u8..=9,
            other_index in 0_usize..81,
            other_value in 1_u8..=9,
        ) {
            let puzzle = puzzle(0);
            let pos = Position::new(x, y);
            let digit = Digit::from_value(digit_value);

            let other = Position::from_index(other_index);
            prop_assume!(other.region_index() != pos.region_index());

            let mutated = puzzle.with_placement(other, Digit::from_value(other_value));
            prop_assert_eq!(
                region_placement_ok(&puzzle, pos, digit),
                region_placement_ok(&mutated, pos, digit),
            );
        }
    }
}
