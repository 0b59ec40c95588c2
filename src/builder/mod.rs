//! Builder API for configuring a machine before its run.
//!
//! This module provides a fluent builder, a serde-friendly configuration
//! struct, and the [`state!`](crate::state) macro for naming handlers after
//! the functions that implement them.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::{MachineBuilder, TraceConfig};
