//! The naked-single constraint propagation solver.

use gridpost_core::{Digit, DigitSet, Position, Puzzle};

use crate::placement::check_placement;

/// Computes the candidate set for the cell at `pos`.
///
/// A digit is a candidate when placing it at `pos` passes the row, column, and
/// region checks against the current grid. Candidate sets are recomputed from
/// scratch on every call; nothing is cached across placements.
///
/// For a cell that already holds a digit this returns the candidates of the
/// hypothetical placement overwriting it, which is rarely what you want; the
/// solver only queries unknown cells.
///
/// # Examples
///
/// ```
/// use gridpost_core::{Digit, Position, Puzzle};
/// use gridpost_solver::candidates;
///
/// let puzzle: Puzzle =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()
///         .unwrap();
///
/// // The second cell of the first row can only hold a 3: a naked single.
/// let set = candidates(&puzzle, Position::new(1, 0));
/// assert_eq!(set.as_single(), Some(Digit::D3));
/// ```
#[must_use]
pub fn candidates(puzzle: &Puzzle, pos: Position) -> DigitSet {
    Digit::ALL
        .into_iter()
        .filter(|&digit| check_placement(puzzle, pos, digit).is_valid())
        .collect()
}

/// Returns `true` if every cell of a complete grid satisfies all three
/// placement checks.
fn complete_grid_consistent(puzzle: &Puzzle) -> bool {
    Position::all().all(|pos| {
        puzzle
            .get(pos)
            .is_some_and(|digit| check_placement(puzzle, pos, digit).is_valid())
    })
}

/// Solves a puzzle by naked-single constraint propagation.
///
/// Each round computes the candidate set of every unknown cell against the
/// current grid and fills all cells with exactly one candidate simultaneously,
/// producing one new puzzle value per round. The loop ends when the grid is
/// complete or a round makes no progress.
///
/// Returns `None` when the puzzle cannot be solved this way:
///
/// - the grid stalls with unknowns remaining (every unknown cell has zero or
///   two-plus candidates), or
/// - the grid is complete but violates a row, column, or region constraint.
///
/// The solver never backtracks or guesses. Puzzles that are solvable only by
/// search are reported unsolvable; this propagation-only behavior is a
/// deliberate design choice, not an oversight.
///
/// Termination is guaranteed: every progressing round strictly reduces the
/// number of unknown cells, so at most 81 rounds run.
///
/// # Examples
///
/// ```
/// use gridpost_core::Puzzle;
/// use gridpost_solver::solve;
///
/// let puzzle: Puzzle =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()
///         .unwrap();
///
/// let solved = solve(&puzzle).expect("fixture is solvable by propagation");
/// assert!(solved.is_complete());
/// ```
#[must_use]
pub fn solve(puzzle: &Puzzle) -> Option<Puzzle> {
    let mut grid = *puzzle;
    loop {
        if grid.is_complete() {
            return complete_grid_consistent(&grid).then_some(grid);
        }

        // Fill every naked single at once, evaluating candidates against the
        // grid as it stood at the start of the round.
        let mut next = grid;
        let mut progressed = false;
        for pos in grid.unknown_positions() {
            if let Some(digit) = candidates(&grid, pos).as_single() {
                next = next.with_placement(pos, digit);
                progressed = true;
            }
        }

        if !progressed {
            // Stalled: remaining unknowns all have zero or multiple candidates.
            return None;
        }
        grid = next;
    }
}
