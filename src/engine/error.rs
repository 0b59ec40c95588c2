//! Machine run errors.

use crate::graph::GraphError;
use thiserror::Error;

/// Errors returned by [`Machine::run`](super::Machine::run).
///
/// `E` is the error type of the state handlers. A handler failure is carried
/// unchanged in [`MachineError::HandlerFailure`].
#[derive(Debug, Error)]
pub enum MachineError<E> {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Machine has already run. Create a new machine for another run")]
    AlreadyRan,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("State handler failed: {0}")]
    HandlerFailure(E),
}

impl<E> MachineError<E> {
    pub fn is_handler_failure(&self) -> bool {
        matches!(self, MachineError::HandlerFailure(_))
    }

    /// The handler's error, if the run stopped because a handler failed.
    pub fn handler_error(&self) -> Option<&E> {
        match self {
            MachineError::HandlerFailure(err) => Some(err),
            _ => None,
        }
    }

    /// Take back the handler's error, if the run stopped because a handler failed.
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            MachineError::HandlerFailure(err) => Some(err),
            _ => None,
        }
    }
}
