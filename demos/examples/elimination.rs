//! # Iterated Elimination
//!
//! Builds a 3x3 game where each elimination exposes the next one: `Center`
//! goes first, which lets `Top` beat `Middle`, which leaves `Bottom` next to
//! `Top`, and so on until only `Top / Left` remains. A [`Recorder`] keeps the
//! order of eliminations.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run -p bimatrix-demos --example elimination
//! ```

use bimatrix_core::PayoffMatrix;
use bimatrix_demos::init_logging;
use bimatrix_observers::Recorder;
use bimatrix_solvers::{
    dominance::{self, Config},
    nash,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    #[rustfmt::skip]
    let game = PayoffMatrix::asymmetric(
        vec![
            (4, 3), (5, 1), (6, 2),
            (2, 1), (8, 4), (3, 6),
            (3, 0), (9, 6), (2, 8),
        ],
        ["Top", "Middle", "Bottom"],
        ["Left", "Center", "Right"],
    )?;

    let mut recorder = Recorder::new();
    let solution = dominance::solve(&game, &Config::strict(), &mut recorder)?;

    for elimination in recorder.eliminations() {
        let actions = game.actions(elimination.player);
        println!(
            "pass {}: {} drops {} (dominated by {})",
            elimination.pass,
            elimination.player,
            actions[elimination.index],
            actions[elimination.by]
        );
    }

    println!(
        "Survivors: rows {:?}, columns {:?} after {} passes ({:?})",
        solution.matrix.row_actions(),
        solution.matrix.col_actions(),
        solution.passes,
        solution.status
    );
    println!("Equilibria of the full game: {:?}", nash::solve(&game)?);

    Ok(())
}
