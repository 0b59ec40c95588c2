//! Macros for ergonomic state construction.

/// Build a [`State`](crate::core::State) named after its handler.
///
/// `state!(handler)` names the state after the handler's identifier, the way
/// it is spelled in the source. `state!("Name" => handler)` gives it an
/// explicit name, for closures or when the function name is not what should
/// appear in the graph.
///
/// # Example
///
/// ```
/// use stategraph::core::Step;
/// use stategraph::state;
///
/// fn wander() -> Step<String> {
///     Step::next(state!(chase))
/// }
///
/// fn chase() -> Step<String> {
///     Step::end()
/// }
///
/// assert_eq!(state!(wander).name(), "wander");
/// assert_eq!(state!("Wander" => wander).name(), "Wander");
/// ```
#[macro_export]
macro_rules! state {
    ($handler:ident $(,)?) => {
        $crate::core::State::new(stringify!($handler), $handler)
    };
    ($name:expr => $handler:expr $(,)?) => {
        $crate::core::State::new($name, $handler)
    };
}
