use std::{fs, path::PathBuf};

use bimatrix_core::{Cell, PayoffMatrix};
use bimatrix_solvers::{
    dominance::{self, Config, Status},
    nash, pareto,
};

fn game_file(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "games", name].iter().collect();
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {}: {err}", path.display()))
}

fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
    pairs.iter().copied().map(Cell::from).collect()
}

#[test]
fn stag_hunt_from_json() {
    let game: PayoffMatrix<i32> = serde_json::from_str(&game_file("stag_hunt.json")).unwrap();

    assert!(!game.is_asymmetric());
    assert_eq!(game.col_actions(), ["Stag", "Hare"]);
    assert_eq!(nash::solve(&game).unwrap(), cells(&[(0, 0), (1, 1)]));
    assert_eq!(pareto::solve(&game).unwrap(), cells(&[(0, 0)]));

    let solution = dominance::solve_unobserved(&game, &Config::strict()).unwrap();
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.matrix.shape(), (2, 2));
}

#[test]
fn entry_game_from_yaml() {
    let game: PayoffMatrix<i32> = serde_yaml::from_str(&game_file("entry.yaml")).unwrap();

    assert_eq!(game.col_actions(), ["Enter", "Stay out"]);
    assert_eq!(nash::solve(&game).unwrap(), cells(&[(0, 0), (1, 1)]));
    assert_eq!(pareto::solve(&game).unwrap(), cells(&[(0, 0), (0, 1), (1, 1)]));

    // Fighting is only weakly dominated, so only weak elimination removes it.
    let strict = dominance::eliminate_dominated(&game, true).unwrap();
    assert_eq!(strict.shape(), (2, 2));

    let weak = dominance::eliminate_dominated(&game, false).unwrap();
    assert_eq!(weak.row_actions(), ["Accommodate"]);
    assert_eq!(weak.col_actions(), ["Enter"]);
    assert_eq!(weak.flatten(), vec![(2, 1)]);
}

#[test]
fn elimination_chain_from_toml() {
    let game: PayoffMatrix<f64> = toml::from_str(&game_file("chain.toml")).unwrap();

    let solution = dominance::solve_unobserved(&game, &Config::strict()).unwrap();

    assert_eq!(solution.status, Status::SingleStrategy);
    assert_eq!(solution.passes, 3);
    assert_eq!(solution.matrix.row_actions(), ["Top"]);
    assert_eq!(solution.matrix.col_actions(), ["Left"]);
    assert_eq!(solution.matrix.flatten(), vec![(4.0, 3.0)]);
    assert_eq!(nash::solve(&game).unwrap(), cells(&[(0, 0)]));
}

#[test]
fn reduced_game_serializes_as_asymmetric() {
    let game: PayoffMatrix<f64> = toml::from_str(&game_file("chain.toml")).unwrap();
    let reduced = dominance::eliminate_dominated(&game, true).unwrap();

    let json = serde_json::to_value(&reduced).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "payoffs": [[4.0, 3.0]],
            "row_actions": ["Top"],
            "col_actions": ["Left"],
            "asymmetric": true,
        })
    );

    let back: PayoffMatrix<f64> = serde_json::from_value(json).unwrap();
    assert_eq!(back, reduced);
}

#[test]
fn malformed_documents_are_rejected() {
    let yaml = "payoffs: [[1, 1], [2, 2]]\nrow_actions: [a]\ncol_actions: [x]\nasymmetric: true\n";

    let err = serde_yaml::from_str::<PayoffMatrix<i32>>(yaml).unwrap_err();

    assert!(err.to_string().contains("payoffs"), "unexpected error: {err}");
}
