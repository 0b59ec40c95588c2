//! Serializable snapshots of a recorded transition history.
//!
//! A snapshot captures what a run did, for storage or later analysis. It does
//! not capture the machine itself: state handlers are code and cannot be
//! serialized, so a snapshot cannot resume a run.

use crate::core::TransitionHistory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

const JSON_FORMAT: &str = "JSON";
const BINARY_FORMAT: &str = "bincode";

/// Versioned copy of a transition history.
///
/// # Example
///
/// ```rust
/// use stategraph::core::TransitionHistory;
/// use stategraph::snapshot::HistorySnapshot;
///
/// let mut history = TransitionHistory::new();
/// history.record("start", "Idle");
/// history.record("Idle", "end");
///
/// let snapshot = HistorySnapshot::capture(&history);
/// let json = snapshot.to_json().unwrap();
/// let restored = HistorySnapshot::from_json(&json).unwrap();
///
/// assert_eq!(restored.history, history);
/// assert_eq!(restored.id, snapshot.id);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Recorded transition history
    pub history: TransitionHistory,
}

impl HistorySnapshot {
    /// Capture a copy of `history`.
    pub fn capture(history: &TransitionHistory) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            history: history.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::EncodeFailed {
            format: JSON_FORMAT,
            message: e.to_string(),
        })
    }

    /// Deserialize from JSON, checking version and history invariants.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json).map_err(|e| SnapshotError::DecodeFailed {
            format: JSON_FORMAT,
            message: e.to_string(),
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serialize to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::EncodeFailed {
            format: BINARY_FORMAT,
            message: e.to_string(),
        })
    }

    /// Deserialize from the binary form, checking version and history invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(|e| SnapshotError::DecodeFailed {
            format: BINARY_FORMAT,
            message: e.to_string(),
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        self.history
            .validate()
            .map_err(|reason| SnapshotError::InvalidHistory {
                id: self.id,
                reason,
            })?;
        debug!(id = %self.id, steps = self.history.step(), "Loaded history snapshot");
        Ok(())
    }
}
