//! Classic two-player games and helpers shared by the demo programs.
//!
//! The programs under `demos/examples/` analyze the games in [`games`]:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p bimatrix-demos --example classics
//! ```

pub mod games;

use std::fmt::Display;

use bimatrix_core::{Cell, PayoffMatrix};

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed");
    }
}

/// Formats cells as `Row label / Column label` pairs.
#[must_use]
pub fn describe<T>(matrix: &PayoffMatrix<T>, cells: &[Cell]) -> Vec<String>
where
    T: Display,
{
    cells
        .iter()
        .filter_map(|&cell| {
            let (x, y) = matrix.payoff(cell)?;
            Some(format!(
                "{} / {} -> ({x}, {y})",
                matrix.row_actions()[cell.row],
                matrix.col_actions()[cell.col]
            ))
        })
        .collect()
}
