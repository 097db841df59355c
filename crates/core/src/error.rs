use thiserror::Error;

use crate::Player;

/// Errors raised when flat payoff data does not fit the declared dimensions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("symmetric game needs a square number of payoffs, got {len}")]
    NotPerfectSquare { len: usize },

    #[error("expected {expected} row actions, got {actual}")]
    RowActions { expected: usize, actual: usize },

    #[error("asymmetric game requires column actions")]
    MissingColActions,

    #[error("{len} payoffs do not fill a {rows}x{cols} matrix")]
    Length {
        len: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{player} strategy {index} is out of bounds for {len} strategies")]
    IndexOutOfBounds {
        player: Player,
        index: usize,
        len: usize,
    },
}

/// Error raised when a game has no strategies for at least one player.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("game has no outcomes: {rows} rows x {cols} columns")]
pub struct EmptyGameError {
    pub rows: usize,
    pub cols: usize,
}
