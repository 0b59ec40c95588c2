//! What a state handler hands back to the machine.

use super::state::State;

/// Result of invoking a state handler once.
///
/// A step pairs the next state (or `None` for a terminal state) with the
/// handler's outcome. The machine records the transition to the next state
/// before it looks at the outcome, so a failing step that still names a next
/// state shows up as an edge to that state in the transition history.
///
/// # Example
///
/// ```rust
/// use stategraph::core::{State, Step};
///
/// fn done() -> Step<&'static str> {
///     Step::end()
/// }
///
/// let step = Step::next(State::new("done", done));
/// assert_eq!(step.next_state().map(|s| s.name()), Some("done"));
/// assert!(!step.is_failure());
///
/// let failed: Step<&'static str> = Step::fail("boom");
/// assert!(failed.is_failure());
/// assert!(failed.next_state().is_none());
/// ```
#[derive(Debug)]
pub struct Step<E> {
    next: Option<State<E>>,
    outcome: Result<(), E>,
}

impl<E> Step<E> {
    /// Create a step from its raw parts.
    pub fn new(next: Option<State<E>>, outcome: Result<(), E>) -> Self {
        Self { next, outcome }
    }

    /// Continue with `state`.
    pub fn next(state: State<E>) -> Self {
        Self::new(Some(state), Ok(()))
    }

    /// Terminal state reached, stop without error.
    pub fn end() -> Self {
        Self::new(None, Ok(()))
    }

    /// Stop the run with `error`.
    pub fn fail(error: E) -> Self {
        Self::new(None, Err(error))
    }

    /// Stop the run with `error`, recording the transition toward `state`.
    ///
    /// `state` is never invoked.
    pub fn fail_toward(state: State<E>, error: E) -> Self {
        Self::new(Some(state), Err(error))
    }

    pub fn next_state(&self) -> Option<&State<E>> {
        self.next.as_ref()
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn into_parts(self) -> (Option<State<E>>, Result<(), E>) {
        (self.next, self.outcome)
    }
}

impl<E> From<(Option<State<E>>, Result<(), E>)> for Step<E> {
    fn from((next, outcome): (Option<State<E>>, Result<(), E>)) -> Self {
        Self::new(next, outcome)
    }
}
