//! Core types for analyzing two-player strategic-form games.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`PayoffMatrix`] — the game: an N×M grid of payoff pairs plus the action
//!   labels of both players
//! - [`Cell`] and [`Outcome`] — a position in the grid, and that position with
//!   its payoff pair attached
//! - [`Player`] — the row or the column player
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`ShapeError`], [`EmptyGameError`] — construction and precondition failures

mod cell;
mod error;
mod matrix;
mod observer;
mod player;

#[cfg(feature = "serde-derive")]
mod flat;

pub use cell::{Cell, Outcome};
pub use error::{EmptyGameError, ShapeError};
pub use matrix::PayoffMatrix;
pub use observer::Observer;
pub use player::Player;

#[cfg(feature = "serde-derive")]
pub use flat::FlatGame;
