//! Build errors for the machine builder.

use crate::graph::GraphError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Both a graph directory and a graph writer were given. Pick one")]
    ConflictingSinks,

    #[error("Failed to set up graph export: {0}")]
    Graph(#[from] GraphError),
}
