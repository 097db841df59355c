/// Actions an observer can take during dominance elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and build the reduced game from the eliminations made
    /// so far, including the one just reported.
    StopEarly,
}
