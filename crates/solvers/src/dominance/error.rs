use bimatrix_core::{EmptyGameError, ShapeError};
use thiserror::Error;

/// Errors that can occur during dominance elimination.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    EmptyGame(#[from] EmptyGameError),

    #[error("failed to build reduced game: {0}")]
    Shape(#[from] ShapeError),
}
