use bimatrix_core::{Observer, Player};
use bimatrix_solvers::dominance::Elimination;

use crate::traits::{CanStopEarly, HasElimination};

/// Records every elimination, optionally stopping after a fixed number.
///
/// Pass `&mut recorder` to a solver to inspect the record afterwards.
///
/// # Example
///
/// ```
/// use bimatrix_core::PayoffMatrix;
/// use bimatrix_observers::Recorder;
/// use bimatrix_solvers::dominance::{self, Config, Status};
///
/// let game = PayoffMatrix::symmetric(vec![(3, 3), (0, 5), (5, 0), (1, 1)], ["C", "D"]).unwrap();
/// let mut recorder = Recorder::stop_after(1);
///
/// let solution = dominance::solve(&game, &Config::strict(), &mut recorder).unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(recorder.eliminations().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    eliminations: Vec<Elimination>,
    limit: Option<usize>,
}

impl Recorder {
    /// Creates a recorder that never stops the solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that stops the solver once `limit` eliminations
    /// have been recorded.
    ///
    /// A limit of zero stops at the first elimination.
    #[must_use]
    pub fn stop_after(limit: usize) -> Self {
        Self {
            eliminations: Vec::new(),
            limit: Some(limit),
        }
    }

    #[must_use]
    pub fn eliminations(&self) -> &[Elimination] {
        &self.eliminations
    }

    /// Returns the recorded eliminations of `player`'s strategies, in order.
    pub fn of(&self, player: Player) -> impl Iterator<Item = &Elimination> {
        self.eliminations
            .iter()
            .filter(move |elimination| elimination.player == player)
    }

    /// Consumes the recorder and returns the eliminations.
    #[must_use]
    pub fn into_eliminations(self) -> Vec<Elimination> {
        self.eliminations
    }

    fn record<A: CanStopEarly>(&mut self, elimination: Elimination) -> Option<A> {
        self.eliminations.push(elimination);

        match self.limit {
            Some(limit) if self.eliminations.len() >= limit => Some(A::stop_early()),
            _ => None,
        }
    }
}

impl<E: HasElimination, A: CanStopEarly> Observer<E, A> for Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.elimination())
    }
}

impl<E: HasElimination, A: CanStopEarly> Observer<E, A> for &mut Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.elimination())
    }
}
