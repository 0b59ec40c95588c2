//! Named state handlers.
//!
//! A state is a unit of behavior the machine invokes. Each state carries an
//! explicit display name, which is what shows up as a vertex in the recorded
//! transition graph.

use super::step::Step;
use std::fmt;
use std::rc::Rc;

/// Reserved vertex name for the synthetic entry point of every run.
pub const START_STATE: &str = "start";

/// Reserved vertex name for the synthetic terminal vertex of every run.
pub const END_STATE: &str = "end";

/// Shared handler callable.
///
/// Handlers run on the caller's thread, one at a time, so they need not be
/// `Send` or `Sync` and may capture `Rc<RefCell<_>>` state.
pub type Handler<E> = Rc<dyn Fn() -> Step<E>>;

/// A named state handler.
///
/// The handler takes no arguments and returns a [`Step`]: the next state to
/// run (or none, for a terminal state) together with an outcome. States are
/// cheap to clone; clones share the same callable.
///
/// Two states with the same name are the same vertex as far as transition
/// recording is concerned, regardless of what their handlers do.
///
/// # Example
///
/// ```rust
/// use stategraph::core::{State, Step};
///
/// fn idle() -> Step<String> {
///     Step::end()
/// }
///
/// let state = State::new("idle", idle);
/// assert_eq!(state.name(), "idle");
/// assert!(state.call().next_state().is_none());
/// ```
pub struct State<E> {
    name: Rc<str>,
    handler: Handler<E>,
}

impl<E> State<E> {
    /// Create a state from a display name and a handler.
    pub fn new<F>(name: impl Into<Rc<str>>, handler: F) -> Self
    where
        F: Fn() -> Step<E> + 'static,
    {
        Self {
            name: name.into(),
            handler: Rc::new(handler),
        }
    }

    /// The state's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the handler once.
    pub fn call(&self) -> Step<E> {
        (self.handler)()
    }

    /// Check whether this state's name collides with a reserved vertex name.
    pub fn is_reserved(&self) -> bool {
        matches!(self.name(), START_STATE | END_STATE)
    }
}

impl<E> Clone for State<E> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<E> fmt::Debug for State<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("name", &self.name).finish()
    }
}

impl<E> fmt::Display for State<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Display name of an optional next state, with `None` mapped to [`END_STATE`].
pub fn state_name<E>(state: Option<&State<E>>) -> &str {
    state.map(|s| s.name()).unwrap_or(END_STATE)
}
