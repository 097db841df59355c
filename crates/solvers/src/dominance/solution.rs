use bimatrix_core::{PayoffMatrix, Player};

/// Indicates why the dominance solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A full pass over both players eliminated nothing.
    Converged,

    /// A player was down to a single strategy.
    SingleStrategy,

    /// Reached the configured pass limit.
    MaxPasses,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One eliminated strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// The pass (1-based) in which the strategy was eliminated.
    pub pass: usize,

    /// Whose strategy was eliminated.
    pub player: Player,

    /// Index of the eliminated strategy in the original matrix.
    pub index: usize,

    /// Index of the adjacent strategy that dominated it.
    pub by: usize,
}

/// The result of dominance elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// The surviving sub-game, built in asymmetric mode.
    pub matrix: PayoffMatrix<T>,

    /// Original indices of the surviving rows, in order.
    pub rows: Vec<usize>,

    /// Original indices of the surviving columns, in order.
    pub cols: Vec<usize>,

    /// Every elimination, in the order it happened.
    pub eliminated: Vec<Elimination>,

    /// Number of passes started.
    pub passes: usize,
}
