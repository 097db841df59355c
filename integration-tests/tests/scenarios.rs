use bimatrix_core::{Cell, PayoffMatrix, Player};
use bimatrix_demos::games;
use bimatrix_observers::{Logger, Recorder};
use bimatrix_solvers::{
    dominance::{self, Config, Status},
    nash, pareto,
};

fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
    pairs.iter().copied().map(Cell::from).collect()
}

#[test]
fn prisoners_dilemma() {
    let game = PayoffMatrix::symmetric(vec![(3, 3), (0, 5), (5, 0), (1, 1)], ["C", "D"]).unwrap();

    assert_eq!(nash::solve(&game).unwrap(), cells(&[(1, 1)]));
    assert_eq!(
        pareto::solve(&game).unwrap(),
        cells(&[(0, 0), (0, 1), (1, 0)])
    );

    let reduced = dominance::eliminate_dominated(&game, true).unwrap();
    assert_eq!(reduced.flatten(), vec![(1, 1)]);
    assert_eq!(reduced.row_actions(), ["D"]);
}

#[test]
fn matching_pennies_has_no_pure_equilibrium() {
    let game =
        PayoffMatrix::symmetric(vec![(1, -1), (-1, 1), (-1, 1), (1, -1)], ["H", "T"]).unwrap();

    assert!(nash::solve(&game).unwrap().is_empty());
    assert_eq!(pareto::solve(&game).unwrap().len(), 4);
    assert_eq!(
        dominance::eliminate_dominated(&game, true).unwrap().shape(),
        (2, 2)
    );
}

#[test]
fn single_efficient_outcome() {
    let game = PayoffMatrix::symmetric(vec![(4, 4), (0, 0), (0, 0), (1, 1)], ["A", "B"]).unwrap();

    assert_eq!(pareto::solve(&game).unwrap(), cells(&[(0, 0)]));
}

#[test]
fn strict_dominance_keeps_the_first_row() {
    let game = PayoffMatrix::symmetric(vec![(5, 1), (5, 0), (1, 1), (1, 0)], ["A", "B"]).unwrap();

    let reduced = dominance::eliminate_dominated(&game, true).unwrap();

    assert_eq!(reduced.rows(), 1);
    assert_eq!(reduced.row_actions(), ["A"]);
    assert!(reduced.is_asymmetric());
}

#[test]
fn dominance_leaves_the_input_unchanged() {
    let game = games::prisoners_dilemma();
    let before = game.clone();

    let mut logger = Logger::debug();
    let solution = dominance::solve(&game, &Config::weak(), &mut logger).unwrap();

    assert_eq!(game, before);
    assert_eq!(logger.logged(), solution.eliminated.len());
}

#[test]
fn equilibria_survive_strict_elimination() {
    for (name, game) in games::all() {
        let solution = dominance::solve_unobserved(&game, &Config::strict()).unwrap();
        let reduced: Vec<Cell> = nash::solve(&solution.matrix)
            .unwrap()
            .into_iter()
            .map(|cell| Cell::new(solution.rows[cell.row], solution.cols[cell.col]))
            .collect();

        assert_eq!(reduced, nash::solve(&game).unwrap(), "{name}");
    }
}

#[test]
fn recorder_matches_solution_history() {
    let game = games::prisoners_dilemma();
    let mut recorder = Recorder::new();

    let solution = dominance::solve(&game, &Config::strict(), &mut recorder).unwrap();

    assert_eq!(solution.status, Status::SingleStrategy);
    assert_eq!(recorder.eliminations(), solution.eliminated.as_slice());
    assert_eq!(recorder.of(Player::Row).count(), 1);
    assert_eq!(recorder.of(Player::Column).count(), 1);
}

#[test]
fn empty_game_is_rejected_everywhere() {
    let game =
        PayoffMatrix::<f64>::asymmetric(vec![], Vec::<String>::new(), ["a", "b"]).unwrap();

    assert!(nash::solve(&game).is_err());
    assert!(pareto::solve(&game).is_err());
    assert!(matches!(
        dominance::eliminate_dominated(&game, true),
        Err(dominance::Error::EmptyGame(_))
    ));
}
