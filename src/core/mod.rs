//! Core state machine types.
//!
//! This module contains the data model of the machine:
//! - Named state handlers via [`State`]
//! - Handler results via [`Step`]
//! - The transition history recorded during a run
//!
//! Nothing in this module performs I/O.

mod history;
mod state;
mod step;

pub use history::{Edge, Steps, TransitionHistory};
pub use state::{state_name, Handler, State, END_STATE, START_STATE};
pub use step::Step;
