/// Watches a solver as it works on a game and may steer it.
///
/// The dominance solver reports each eliminated strategy as an event, and an
/// observer can answer with an action such as stopping early. Returning
/// `None` leaves the solver running unchanged.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
///
/// ```
/// use bimatrix_core::Observer;
///
/// let mut seen = 0;
/// let mut count = |_: &&str| -> Option<()> {
///     seen += 1;
///     None
/// };
///
/// assert_eq!(count.observe(&"row 1 eliminated"), None);
/// assert_eq!(seen, 1);
/// ```
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
