//! Capability traits for solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used wherever the capability exists.
//!
//! # Example
//!
//! ```rust
//! use bimatrix_core::{Observer, Player};
//! use bimatrix_observers::traits::{CanStopEarly, HasElimination};
//!
//! /// Stops as soon as any column is eliminated.
//! struct FirstColumn;
//!
//! impl<E: HasElimination, A: CanStopEarly> Observer<E, A> for FirstColumn {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.player() == Player::Column).then(A::stop_early)
//!     }
//! }
//! ```

use bimatrix_core::Player;
use bimatrix_solvers::dominance::{self, Elimination};

/// An event that reports an eliminated strategy.
pub trait HasElimination {
    /// Returns the elimination this event reports.
    fn elimination(&self) -> Elimination;

    /// Returns the player who lost a strategy.
    fn player(&self) -> Player {
        self.elimination().player
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasElimination for dominance::Event<'_> {
    fn elimination(&self) -> Elimination {
        self.elimination
    }
}

impl CanStopEarly for dominance::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
