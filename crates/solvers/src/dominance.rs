//! Iterated elimination of dominated strategies.
//!
//! # Algorithm
//!
//! The solver repeats passes over both players until nothing changes:
//!
//! 1. **Row pass** — walk adjacent pairs of surviving rows in their original
//!    order and compare the row player's payoffs over the columns that are
//!    still alive. A row is dominated by its neighbour when it is worse
//!    (strict: `<`, weak: `<=`) against every live column. Columns already
//!    eliminated never block a finding.
//! 2. **Column pass** — the same over adjacent surviving columns, using the
//!    column player's payoffs and the rows still alive after step 1.
//!
//! At most one strategy of each adjacent pair is removed per pass, so when
//! two neighbours weakly dominate each other (equal payoffs) only the lower
//! index goes and every player always keeps at least one strategy.
//!
//! Passes stop when a full pass removes nothing, when a player is down to a
//! single strategy, when [`Config::max_passes`] is reached, or when an
//! observer returns [`Action::StopEarly`].
//!
//! # Adjacency
//!
//! Only neighbouring survivors are compared. A strategy dominated by a
//! non-adjacent rival is found only once the strategies between them have
//! been eliminated; if they never are, it survives. This keeps the scan
//! linear per pass and makes the reduced game a fixed point: solving it
//! again with the same [`Dominance`] removes nothing.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per eliminated strategy, after it has been
//! removed. Observers can return [`Action::StopEarly`] to keep the
//! eliminations made so far and return immediately.
//!
//! # Example
//!
//! ```
//! use bimatrix_core::PayoffMatrix;
//! use bimatrix_solvers::dominance;
//!
//! let dilemma = PayoffMatrix::symmetric(
//!     vec![(3, 3), (0, 5), (5, 0), (1, 1)],
//!     ["Cooperate", "Defect"],
//! )
//! .unwrap();
//!
//! let reduced = dominance::eliminate_dominated(&dilemma, true).unwrap();
//!
//! assert_eq!(reduced.row_actions(), ["Defect"]);
//! assert_eq!(reduced.col_actions(), ["Defect"]);
//! ```

mod action;
mod config;
mod error;
mod event;
mod scan;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, Dominance};
pub use error::Error;
pub use event::Event;
pub use solution::{Elimination, Solution, Status};

use bimatrix_core::{Observer, PayoffMatrix, Player};

use scan::{Eliminated, scan};

/// Removes dominated strategies and returns the surviving sub-game.
///
/// `strict` selects [`Dominance::Strict`] or [`Dominance::Weak`]. This is a
/// convenience wrapper around [`solve_unobserved`] that keeps only the
/// reduced matrix.
///
/// # Errors
///
/// Returns an error if either player has no strategies.
pub fn eliminate_dominated<T>(
    matrix: &PayoffMatrix<T>,
    strict: bool,
) -> Result<PayoffMatrix<T>, Error>
where
    T: PartialOrd + Clone,
{
    solve_unobserved(matrix, &Config::from_strict(strict)).map(|solution| solution.matrix)
}

/// Runs iterated elimination of dominated strategies.
///
/// The observer receives an [`Event`] for each eliminated strategy.
/// See the [module docs](self) for the pass structure and stopping rules.
///
/// # Errors
///
/// Returns an error if either player has no strategies.
pub fn solve<T, Obs>(
    matrix: &PayoffMatrix<T>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: PartialOrd + Clone,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    matrix.ensure_nonempty()?;

    let (rows, cols) = matrix.shape();
    let mut eliminated = Eliminated::default();
    let mut history = Vec::new();
    let mut passes = 0;

    let status = 'passes: loop {
        if eliminated.rows.len() + 1 >= rows || eliminated.cols.len() + 1 >= cols {
            break Status::SingleStrategy;
        }
        if passes >= config.max_passes() {
            break Status::MaxPasses;
        }
        passes += 1;

        let mut changed = false;
        for player in [Player::Row, Player::Column] {
            let found = scan(matrix, player, &eliminated, config.dominance());

            for (index, by) in found {
                eliminated.insert(player, index);
                changed = true;

                let elimination = Elimination {
                    pass: passes,
                    player,
                    index,
                    by,
                };
                history.push(elimination);

                let actions = matrix.actions(player);
                let event = Event {
                    elimination,
                    label: &actions[index],
                    by_label: &actions[by],
                    remaining: (rows - eliminated.rows.len(), cols - eliminated.cols.len()),
                };
                log::debug!("{event}");

                if let Some(Action::StopEarly) = observer.observe(&event) {
                    break 'passes Status::StoppedByObserver;
                }
            }
        }

        if !changed {
            break Status::Converged;
        }
    };

    let surviving_rows = eliminated.survivors(Player::Row, rows);
    let surviving_cols = eliminated.survivors(Player::Column, cols);
    let reduced = matrix.submatrix(&surviving_rows, &surviving_cols)?;

    log::debug!(
        "dominance reduced {rows}x{cols} game to {}x{} after {passes} passes ({status:?})",
        reduced.rows(),
        reduced.cols()
    );

    Ok(Solution {
        status,
        matrix: reduced,
        rows: surviving_rows,
        cols: surviving_cols,
        eliminated: history,
        passes,
    })
}

/// Runs iterated elimination without observation.
///
/// # Errors
///
/// Returns an error if either player has no strategies.
pub fn solve_unobserved<T>(
    matrix: &PayoffMatrix<T>,
    config: &Config,
) -> Result<Solution<T>, Error>
where
    T: PartialOrd + Clone,
{
    solve(matrix, config, ())
}
