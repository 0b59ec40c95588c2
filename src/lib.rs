//! Stategraph: a minimal finite-state machine runner
//!
//! A caller hands the machine a starting state; the machine keeps invoking
//! state handlers until one returns no next state or reports a failure. While
//! running, the machine can record every transition with the step at which it
//! happened and render that history as a Graphviz DOT graph.
//!
//! # Core Concepts
//!
//! - **State**: a named handler, see [`State`] and the [`state!`] macro
//! - **Step**: what a handler returns, the next state plus an outcome
//! - **History**: adjacency map of `from -> to -> [steps]`
//! - **Graph export**: the history written as `dot_graph.gv` after the run
//!
//! # Example
//!
//! ```rust
//! use stategraph::{state, Machine, Step};
//!
//! fn wander() -> Step<String> {
//!     Step::next(state!(chase))
//! }
//!
//! fn chase() -> Step<String> {
//!     Step::end()
//! }
//!
//! let mut machine = Machine::new();
//! machine.record_transitions();
//! machine.run(state!(wander)).unwrap();
//!
//! let history = machine.history();
//! assert_eq!(history.steps("start", "wander"), Some(&[1][..]));
//! assert_eq!(history.steps("wander", "chase"), Some(&[2][..]));
//! assert_eq!(history.steps("chase", "end"), Some(&[3][..]));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod graph;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{MachineBuilder, TraceConfig};
pub use self::core::{State, Step, TransitionHistory};
pub use engine::{Machine, MachineError};
pub use graph::GraphError;
