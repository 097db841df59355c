use std::fmt::Display;

use bimatrix_core::Observer;
use log::Level;

/// Writes every observed event to the `log` facade.
///
/// The logger never returns an action, so it can be passed to any solver
/// whose events implement [`Display`].
///
/// # Example
///
/// ```
/// use bimatrix_core::PayoffMatrix;
/// use bimatrix_observers::Logger;
/// use bimatrix_solvers::dominance::{self, Config};
///
/// let game = PayoffMatrix::symmetric(vec![(3, 3), (0, 5), (5, 0), (1, 1)], ["C", "D"]).unwrap();
///
/// let solution = dominance::solve(&game, &Config::strict(), Logger::info()).unwrap();
/// assert_eq!(solution.matrix.row_actions(), ["D"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: Level,
    logged: usize,
}

impl Logger {
    /// Creates a logger that writes at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, logged: 0 }
    }

    /// Creates a logger that writes at [`Level::Info`].
    #[must_use]
    pub fn info() -> Self {
        Self::new(Level::Info)
    }

    /// Creates a logger that writes at [`Level::Debug`].
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::Debug)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns how many events have been observed.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::debug()
    }
}

impl<E: Display, A> Observer<E, A> for Logger {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.logged += 1;
        log::log!(self.level, "{event}");
        None
    }
}

impl<E: Display, A> Observer<E, A> for &mut Logger {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
