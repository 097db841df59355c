use std::fmt;

/// A position in a payoff matrix: the row player's and the column player's
/// chosen strategy indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Creates a new cell.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cell together with the payoff pair found there.
///
/// Outcomes borrow from the [`PayoffMatrix`](crate::PayoffMatrix) they were
/// read from; they are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<'a, T> {
    /// Where in the matrix this outcome sits.
    pub cell: Cell,

    /// The row player's payoff.
    pub x: &'a T,

    /// The column player's payoff.
    pub y: &'a T,
}

impl<T: PartialOrd> Outcome<'_, T> {
    /// Returns `true` if `self` is strictly better than `other` for both players.
    ///
    /// Equal or incomparable payoffs never dominate.
    #[must_use]
    pub fn strictly_dominates(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_and_from_tuples() {
        let cell = Cell::from((2, 5));
        assert_eq!(cell, Cell::new(2, 5));
        assert_eq!(<(usize, usize)>::from(cell), (2, 5));
        assert_eq!(cell.to_string(), "(2, 5)");
    }

    #[test]
    fn domination_requires_both_coordinates() {
        let cell = Cell::new(0, 0);
        let outcome = |x: &'static i32, y: &'static i32| Outcome { cell, x, y };

        assert!(outcome(&4, &4).strictly_dominates(&outcome(&1, &1)));
        assert!(!outcome(&4, &1).strictly_dominates(&outcome(&1, &1)));
        assert!(!outcome(&1, &1).strictly_dominates(&outcome(&1, &1)));
    }

    #[test]
    fn nan_never_dominates() {
        let cell = Cell::new(0, 0);
        let nan = Outcome {
            cell,
            x: &f64::NAN,
            y: &f64::NAN,
        };
        let one = Outcome {
            cell,
            x: &1.0,
            y: &1.0,
        };

        assert!(!nan.strictly_dominates(&one));
        assert!(!one.strictly_dominates(&nan));
    }
}
