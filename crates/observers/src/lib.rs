//! Reusable observers for bimatrix solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! let callers watch or steer the dominance solver without writing closures.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver events and actions
//!   ([`HasElimination`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Logger`] — writes each event to the `log` facade and never intervenes
//! - [`Recorder`] — keeps every elimination and can stop after a fixed count
//!
//! [`Observer`]: bimatrix_core::Observer
//! [`HasElimination`]: traits::HasElimination
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;
mod recorder;

pub use logger::Logger;
pub use recorder::Recorder;
