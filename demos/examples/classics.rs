//! # Classic Games
//!
//! Runs every analysis on the textbook games in the catalog: pure Nash
//! equilibria, Pareto-efficient outcomes, and the game left after strict
//! elimination of dominated strategies.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run -p bimatrix-demos --example classics
//! ```
//!
//! Set `RUST_LOG=debug` to also see each elimination as it happens.

use bimatrix_demos::{describe, games, init_logging};
use bimatrix_observers::Logger;
use bimatrix_solvers::{
    dominance::{self, Config},
    nash, pareto,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    for (name, game) in games::all() {
        println!("== {name} ==");

        let equilibria = nash::solve(&game)?;
        println!("Nash equilibria:   {:?}", describe(&game, &equilibria));

        let efficient = pareto::solve(&game)?;
        println!("Pareto efficient:  {:?}", describe(&game, &efficient));

        let solution = dominance::solve(&game, &Config::strict(), Logger::debug())?;
        println!(
            "After dominance:   rows {:?}, columns {:?} ({:?})",
            solution.matrix.row_actions(),
            solution.matrix.col_actions(),
            solution.status
        );
        println!();
    }

    Ok(())
}
