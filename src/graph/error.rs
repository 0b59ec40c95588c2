//! Graph export errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while enabling or writing the transition graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph file could not be created
    #[error("Failed to create graph file '{}': {source}", path.display())]
    SinkCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the rendered graph to the sink failed
    #[error("Failed to write state transition graph: {0}")]
    SinkWriteFailed(#[source] io::Error),

    /// The graph has already been rendered for this machine
    #[error("State transition graph has already been rendered")]
    ExportClosed,
}
