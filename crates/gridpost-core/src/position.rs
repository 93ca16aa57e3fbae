//! Board position types.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions map to indices of the flat 81-cell representation in
/// row-major order.
///
/// # Examples
///
/// ```
/// use gridpost_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.index(), 40); // row 4, column 4 -> 4 * 9 + 4
/// assert_eq!(Position::from_index(40), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position from a column (`x`) and row (`y`).
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index into an 81-cell container.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Creates a position from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 81.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Returns the index (0-8) of the 3x3 region containing this position.
    ///
    /// Regions are numbered left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpost_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).region_index(), 0);
    /// assert_eq!(Position::new(8, 0).region_index(), 2);
    /// assert_eq!(Position::new(4, 4).region_index(), 4);
    /// assert_eq!(Position::new(8, 8).region_index(), 8);
    /// ```
    #[must_use]
    pub const fn region_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3x3 region containing this position.
    #[must_use]
    pub const fn region_origin(self) -> Self {
        Self {
            x: self.x / 3 * 3,
            y: self.y / 3 * 3,
        }
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
