//! Placement checking and solving for the gridpost sudoku service.
//!
//! The crate has two layers:
//!
//! - [`placement`]: the three independent legality checks (row, column, region)
//!   and their aggregation into a [`Conflicts`] report
//! - [`solve`](mod@solve): per-cell [`candidates`] computation and the
//!   naked-single propagation [`solve`](fn@solve) function
//!
//! The solver is a stateless set of free functions over immutable [`Puzzle`]
//! values; it never mutates its input and holds no state between calls, so it
//! is safe to call from concurrent request handlers.
//!
//! # Examples
//!
//! ```
//! use gridpost_core::Puzzle;
//! use gridpost_solver::solve;
//!
//! let puzzle: Puzzle =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!         .parse()
//!         .unwrap();
//! assert!(solve(&puzzle).is_some());
//! ```
//!
//! [`Puzzle`]: gridpost_core::Puzzle

pub mod placement;
pub mod solve;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::{
    placement::{
        Conflicts, check_placement, column_placement_ok, region_placement_ok, row_placement_ok,
    },
    solve::{candidates, solve},
};
