//! Solvers for two-player strategic-form games.
//!
//! Every solver borrows a [`PayoffMatrix`] read-only, so they can run in any
//! order against the same game.
//!
//! # Solvers
//!
//! - [`nash`] — pure-strategy Nash equilibria
//! - [`pareto`] — Pareto-efficient outcomes
//! - [`dominance`] — iterated elimination of dominated strategies, producing
//!   a reduced game
//!
//! [`PayoffMatrix`]: bimatrix_core::PayoffMatrix

pub mod dominance;
pub mod nash;
pub mod pareto;
