//! Pure-strategy Nash equilibria.
//!
//! # Algorithm
//!
//! A cell is a pure Nash equilibrium when each player's strategy is a best
//! response to the other's:
//!
//! 1. Reduce the row player's payoffs along each column to get the best
//!    payoff against every column, then mark the cells that attain it.
//! 2. Reduce the column player's payoffs along each row and mark the cells
//!    that attain that maximum.
//! 3. Keep the cells marked in both passes.
//!
//! Ties are kept: when several rows reach the column maximum, all of them are
//! best responses. Payoffs that do not compare (such as `NaN`) never count as
//! a best response.
//!
//! # Example
//!
//! ```
//! use bimatrix_core::{Cell, PayoffMatrix};
//! use bimatrix_solvers::nash;
//!
//! let dilemma = PayoffMatrix::symmetric(
//!     vec![(3, 3), (0, 5), (5, 0), (1, 1)],
//!     ["Cooperate", "Defect"],
//! )
//! .unwrap();
//!
//! assert_eq!(nash::solve(&dilemma).unwrap(), vec![Cell::new(1, 1)]);
//! ```

use bimatrix_core::{Cell, EmptyGameError, PayoffMatrix, Player};
use ndarray::{Array2, ArrayView, ArrayView1, ArrayView2, Axis, Dimension, Zip};

/// Finds every pure-strategy Nash equilibrium, in row-major order.
///
/// # Errors
///
/// Returns an [`EmptyGameError`] if either player has no strategies.
pub fn solve<T: PartialOrd>(matrix: &PayoffMatrix<T>) -> Result<Vec<Cell>, EmptyGameError> {
    let row_best = best_responses(matrix, Player::Row)?;
    let col_best = best_responses(matrix, Player::Column)?;

    let equilibria: Vec<Cell> = Zip::from(&row_best)
        .and(&col_best)
        .map_collect(|&row, &col| row && col)
        .indexed_iter()
        .filter_map(|(index, &both)| both.then(|| Cell::from(index)))
        .collect();

    log::debug!(
        "found {} pure equilibria in {}x{} game",
        equilibria.len(),
        matrix.rows(),
        matrix.cols()
    );

    Ok(equilibria)
}

/// Marks the cells where `player`'s strategy is a best response.
///
/// For [`Player::Row`] a cell is marked when its row payoff is the largest in
/// its column. For [`Player::Column`] a cell is marked when its column payoff
/// is the largest in its row.
///
/// # Errors
///
/// Returns an [`EmptyGameError`] if either player has no strategies.
pub fn best_responses<T: PartialOrd>(
    matrix: &PayoffMatrix<T>,
    player: Player,
) -> Result<Array2<bool>, EmptyGameError> {
    matrix.ensure_nonempty()?;

    let payoffs = matrix.payoffs(player);
    let mask = match player {
        Player::Row => {
            let best = payoffs.map_axis(Axis(0), best_of);
            attains(payoffs, best.view())
        }
        Player::Column => {
            let best = payoffs.map_axis(Axis(1), best_of).insert_axis(Axis(1));
            attains(payoffs, best.view())
        }
    };

    Ok(mask)
}

/// Returns the largest payoff in a lane, keeping the first of equal values.
///
/// Values that do not compare with themselves are skipped.
fn best_of<T: PartialOrd>(lane: ArrayView1<'_, T>) -> Option<&T> {
    lane.into_iter()
        .filter(|payoff| payoff.partial_cmp(payoff).is_some())
        .reduce(|best, payoff| if payoff > best { payoff } else { best })
}

/// Compares every payoff against the broadcast per-lane best.
fn attains<'a, T, D>(
    payoffs: ArrayView2<'a, T>,
    best: ArrayView<'_, Option<&'a T>, D>,
) -> Array2<bool>
where
    T: PartialEq,
    D: Dimension,
{
    Zip::from(payoffs)
        .and_broadcast(best)
        .map_collect(|payoff, best| best.is_some_and(|best| payoff == best))
}
