use std::fmt;

use super::Elimination;

/// Emitted by the dominance solver each time a strategy is eliminated.
///
/// The elimination has already been applied when the event is observed, so
/// `remaining` counts the strategies still alive afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'a> {
    /// What was eliminated, when, and by whom.
    pub elimination: Elimination,

    /// Action label of the eliminated strategy.
    pub label: &'a str,

    /// Action label of the dominating neighbour.
    pub by_label: &'a str,

    /// Surviving `(rows, cols)` after this elimination.
    pub remaining: (usize, usize),
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Elimination {
            pass,
            player,
            index,
            by,
        } = self.elimination;
        let (rows, cols) = self.remaining;
        write!(
            f,
            "pass {pass}: {player} strategy {index} ({}) dominated by {by} ({}), {rows}x{cols} left",
            self.label, self.by_label
        )
    }
}
