//! A small catalog of textbook games.
//!
//! Every game is symmetric in its labels. Payoffs are listed row-major as
//! `(row player, column player)`.

use bimatrix_core::PayoffMatrix;

fn game(payoffs: Vec<(i32, i32)>, actions: [&str; 2]) -> PayoffMatrix<i32> {
    // Four payoffs and two labels, unwrap is safe
    PayoffMatrix::symmetric(payoffs, actions).unwrap()
}

/// Defection is dominant for both players; the only equilibrium is the one
/// outcome that is not Pareto efficient.
#[must_use]
pub fn prisoners_dilemma() -> PayoffMatrix<i32> {
    game(vec![(3, 3), (0, 5), (5, 0), (1, 1)], ["Cooperate", "Defect"])
}

/// Zero-sum with no pure equilibrium.
#[must_use]
pub fn matching_pennies() -> PayoffMatrix<i32> {
    game(vec![(1, -1), (-1, 1), (-1, 1), (1, -1)], ["Heads", "Tails"])
}

/// Two equilibria: the risky efficient one and the safe inefficient one.
#[must_use]
pub fn stag_hunt() -> PayoffMatrix<i32> {
    game(vec![(4, 4), (0, 3), (3, 0), (3, 3)], ["Stag", "Hare"])
}

#[must_use]
pub fn battle_of_the_sexes() -> PayoffMatrix<i32> {
    game(vec![(3, 2), (0, 0), (0, 0), (2, 3)], ["Opera", "Football"])
}

/// Pure coordination where one equilibrium Pareto dominates the other.
#[must_use]
pub fn coordination() -> PayoffMatrix<i32> {
    game(vec![(4, 4), (0, 0), (0, 0), (1, 1)], ["A", "B"])
}

/// Every catalog game with its display name.
#[must_use]
pub fn all() -> Vec<(&'static str, PayoffMatrix<i32>)> {
    vec![
        ("Prisoner's Dilemma", prisoners_dilemma()),
        ("Matching Pennies", matching_pennies()),
        ("Stag Hunt", stag_hunt()),
        ("Battle of the Sexes", battle_of_the_sexes()),
        ("Coordination", coordination()),
    ]
}
