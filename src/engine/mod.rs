//! The run loop.
//!
//! [`Machine`] drives state handlers until one of them returns no next state
//! or reports a failure, recording every transition along the way when
//! recording is enabled, and renders the transition graph once at the end.

mod error;
mod machine;

pub use error::MachineError;
pub use machine::Machine;
