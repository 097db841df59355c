use std::collections::BTreeSet;

use bimatrix_core::{PayoffMatrix, Player};
use ndarray::{ArrayView1, ArrayView2};

use super::Dominance;

/// Strategies removed so far, by original index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct Eliminated {
    pub(super) rows: BTreeSet<usize>,
    pub(super) cols: BTreeSet<usize>,
}

impl Eliminated {
    pub(super) fn of(&self, player: Player) -> &BTreeSet<usize> {
        match player {
            Player::Row => &self.rows,
            Player::Column => &self.cols,
        }
    }

    pub(super) fn insert(&mut self, player: Player, index: usize) {
        match player {
            Player::Row => self.rows.insert(index),
            Player::Column => self.cols.insert(index),
        };
    }

    /// Returns the indices in `0..len` that `player` still has.
    pub(super) fn survivors(&self, player: Player, len: usize) -> Vec<usize> {
        let dead = self.of(player);
        (0..len).filter(|index| !dead.contains(index)).collect()
    }
}

/// Runs one pass for `player` and returns `(dominated, dominator)` pairs.
///
/// Adjacent survivors are compared over the opponent strategies not yet
/// eliminated. Each pair yields at most one elimination, and a strategy is
/// reported at most once per pass.
pub(super) fn scan<T: PartialOrd>(
    matrix: &PayoffMatrix<T>,
    player: Player,
    eliminated: &Eliminated,
    dominance: Dominance,
) -> Vec<(usize, usize)> {
    // One lane per strategy of `player`, indexed by opponent strategy.
    let lanes: ArrayView2<'_, T> = match player {
        Player::Row => matrix.x_payoffs(),
        Player::Column => matrix.y_payoffs().reversed_axes(),
    };
    let ignored = eliminated.of(player.opponent());
    let survivors = eliminated.survivors(player, lanes.nrows());

    let mut found: Vec<(usize, usize)> = Vec::new();
    for (&lower, &upper) in survivors.iter().zip(survivors.iter().skip(1)) {
        let beaten = if dominated(lanes.row(lower), lanes.row(upper), ignored, dominance) {
            Some((lower, upper))
        } else if dominated(lanes.row(upper), lanes.row(lower), ignored, dominance) {
            Some((upper, lower))
        } else {
            None
        };

        if let Some((index, by)) = beaten {
            log::trace!("{player} strategy {index} is {dominance:?}ly dominated by {by}");
            if !found.iter().any(|&(seen, _)| seen == index) {
                found.push((index, by));
            }
        }
    }

    found
}

/// Returns `true` if `worse` loses to `better` against every opponent
/// strategy outside `ignored`.
fn dominated<T: PartialOrd>(
    worse: ArrayView1<'_, T>,
    better: ArrayView1<'_, T>,
    ignored: &BTreeSet<usize>,
    dominance: Dominance,
) -> bool {
    worse
        .iter()
        .zip(better.iter())
        .enumerate()
        .all(|(k, (w, b))| ignored.contains(&k) || dominance.holds(w, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(payoffs: Vec<(i32, i32)>, rows: usize, cols: usize) -> PayoffMatrix<i32> {
        let row_actions: Vec<String> = (0..rows).map(|i| format!("r{i}")).collect();
        let col_actions: Vec<String> = (0..cols).map(|j| format!("c{j}")).collect();
        PayoffMatrix::asymmetric(payoffs, row_actions, col_actions).unwrap()
    }

    #[test]
    fn reports_each_dominated_row_once() {
        // Rows 0 and 2 both beat row 1, which is reported once.
        let matrix = game(vec![(5, 0), (5, 0), (1, 0), (1, 0), (2, 0), (2, 0)], 3, 2);

        let found = scan(
            &matrix,
            Player::Row,
            &Eliminated::default(),
            Dominance::Strict,
        );

        assert_eq!(found, vec![(1, 0)]);
    }

    #[test]
    fn eliminated_opponent_strategies_are_ignored() {
        // Row 0 loses to row 1 only in column 0.
        let matrix = game(vec![(1, 0), (9, 0), (2, 0), (0, 0)], 2, 2);

        let none = scan(
            &matrix,
            Player::Row,
            &Eliminated::default(),
            Dominance::Strict,
        );
        assert!(none.is_empty());

        let mut eliminated = Eliminated::default();
        eliminated.insert(Player::Column, 1);
        let found = scan(&matrix, Player::Row, &eliminated, Dominance::Strict);
        assert_eq!(found, vec![(0, 1)]);
    }

    #[test]
    fn columns_are_compared_on_column_payoffs() {
        let matrix = game(vec![(0, 3), (0, 1), (0, 4), (0, 2)], 2, 2);

        let found = scan(
            &matrix,
            Player::Column,
            &Eliminated::default(),
            Dominance::Strict,
        );

        assert_eq!(found, vec![(1, 0)]);
    }

    #[test]
    fn skips_eliminated_strategies_when_pairing() {
        // Row 1 separates rows 0 and 2; once it is gone they become neighbours.
        let matrix = game(vec![(1, 0), (1, 0), (3, 0), (0, 0), (2, 0), (2, 0)], 3, 2);

        let mut eliminated = Eliminated::default();
        eliminated.insert(Player::Row, 1);
        let found = scan(&matrix, Player::Row, &eliminated, Dominance::Strict);

        assert_eq!(found, vec![(0, 2)]);
    }

    #[test]
    fn weak_ties_remove_only_the_lower_strategy() {
        let matrix = game(vec![(1, 0), (1, 0), (1, 0), (1, 0)], 2, 2);

        let found = scan(
            &matrix,
            Player::Row,
            &Eliminated::default(),
            Dominance::Weak,
        );

        assert_eq!(found, vec![(0, 1)]);
    }

    #[test]
    fn survivors_skip_eliminated_indices() {
        let mut eliminated = Eliminated::default();
        eliminated.insert(Player::Column, 0);
        eliminated.insert(Player::Column, 2);

        assert_eq!(eliminated.survivors(Player::Column, 4), vec![1, 3]);
        assert_eq!(eliminated.survivors(Player::Row, 2), vec![0, 1]);
    }
}
