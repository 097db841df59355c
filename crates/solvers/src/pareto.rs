//! Pareto-efficient outcomes.
//!
//! An outcome is efficient when no other outcome gives *both* players a
//! strictly higher payoff. Equal payoffs never dominate, so an outcome that
//! ties another in either coordinate survives against it, and comparing an
//! outcome with itself never disqualifies it.
//!
//! The check is an iterative pairwise scan over all `N·M` outcomes.
//!
//! # Example
//!
//! ```
//! use bimatrix_core::{Cell, PayoffMatrix};
//! use bimatrix_solvers::pareto;
//!
//! let game = PayoffMatrix::symmetric(
//!     vec![(4, 4), (0, 0), (0, 0), (1, 1)],
//!     ["A", "B"],
//! )
//! .unwrap();
//!
//! assert_eq!(pareto::solve(&game).unwrap(), vec![Cell::new(0, 0)]);
//! ```

use bimatrix_core::{Cell, EmptyGameError, Outcome, PayoffMatrix};

/// Finds every Pareto-efficient outcome, in row-major order.
///
/// # Errors
///
/// Returns an [`EmptyGameError`] if either player has no strategies.
pub fn solve<T: PartialOrd>(matrix: &PayoffMatrix<T>) -> Result<Vec<Cell>, EmptyGameError> {
    matrix.ensure_nonempty()?;

    let outcomes: Vec<Outcome<'_, T>> = matrix.outcomes().collect();
    let efficient: Vec<Cell> = outcomes
        .iter()
        .filter(|candidate| !dominated(candidate, &outcomes))
        .map(|outcome| outcome.cell)
        .collect();

    log::debug!(
        "{} of {} outcomes are Pareto efficient",
        efficient.len(),
        outcomes.len()
    );

    Ok(efficient)
}

/// Returns whether the outcome at `cell` is Pareto efficient.
///
/// Cells outside the matrix are reported as not efficient.
///
/// # Errors
///
/// Returns an [`EmptyGameError`] if either player has no strategies.
pub fn is_efficient<T: PartialOrd>(
    matrix: &PayoffMatrix<T>,
    cell: Cell,
) -> Result<bool, EmptyGameError> {
    matrix.ensure_nonempty()?;

    let Some(candidate) = matrix.outcome(cell) else {
        return Ok(false);
    };
    let outcomes: Vec<Outcome<'_, T>> = matrix.outcomes().collect();

    Ok(!dominated(&candidate, &outcomes))
}

fn dominated<T: PartialOrd>(candidate: &Outcome<'_, T>, outcomes: &[Outcome<'_, T>]) -> bool {
    outcomes
        .iter()
        .any(|other| other.strictly_dominates(candidate))
}
