//! Snapshot error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised while encoding or loading a [`HistorySnapshot`](super::HistorySnapshot).
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot could not be written in the requested format
    #[error("Failed to encode history snapshot as {format}: {message}")]
    EncodeFailed {
        format: &'static str,
        message: String,
    },

    /// The input is not a history snapshot in the given format
    #[error("Failed to decode history snapshot from {format}: {message}")]
    DecodeFailed {
        format: &'static str,
        message: String,
    },

    #[error("History snapshot format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Step numbers in the stored history do not line up with its step counter
    #[error("History snapshot {id} holds an inconsistent transition history: {reason}")]
    InvalidHistory { id: Uuid, reason: String },
}
