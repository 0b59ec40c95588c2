//! State transition history tracking.
//!
//! The history is an adjacency map from source state name to destination
//! state name to the ordered list of steps at which that edge fired. A single
//! step counter is shared by every edge, so across the whole history the
//! recorded steps form the contiguous range `1..=step`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Step numbers at which a single edge fired, in recording order.
pub type Steps = Vec<u64>;

/// A borrowed view of one recorded edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Source vertex name
    pub from: &'a str,
    /// Destination vertex name
    pub to: &'a str,
    /// Steps at which this edge fired, strictly increasing
    pub steps: &'a [u64],
}

/// Multi-edge transition history with per-edge step counters.
///
/// # Example
///
/// ```rust
/// use stategraph::core::TransitionHistory;
///
/// let mut history = TransitionHistory::new();
/// history.record("start", "Wander");
/// history.record("Wander", "Wander");
/// history.record("Wander", "end");
///
/// assert_eq!(history.step(), 3);
/// assert_eq!(history.steps("Wander", "Wander"), Some(&[2][..]));
/// assert_eq!(history.path(), vec!["start", "Wander", "Wander", "end"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    step: u64,
    edges: BTreeMap<String, BTreeMap<String, Steps>>,
}

impl TransitionHistory {
    /// Create a new empty history with the step counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one transition and return the step number it was assigned.
    pub fn record(&mut self, from: &str, to: &str) -> u64 {
        self.step += 1;
        self.edges
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_default()
            .push(self.step);
        self.step
    }

    /// Current value of the step counter.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Total number of recorded transitions.
    ///
    /// Always equal to [`step`](Self::step) for a history built through
    /// [`record`](Self::record).
    pub fn transition_count(&self) -> usize {
        self.edges
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Steps recorded for the edge `from -> to`, if it ever fired.
    pub fn steps(&self, from: &str, to: &str) -> Option<&[u64]> {
        self.edges
            .get(from)
            .and_then(|targets| targets.get(to))
            .map(Vec::as_slice)
    }

    /// Iterate over every recorded edge, ordered by source then destination name.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.edges.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |(to, steps)| Edge {
                from: from.as_str(),
                to: to.as_str(),
                steps: steps.as_slice(),
            })
        })
    }

    /// Number of distinct `(from, to)` edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Reconstruct the sequence of visited vertices in step order.
    ///
    /// The first element is the source of the earliest transition, followed
    /// by the destination of each transition.
    pub fn path(&self) -> Vec<&str> {
        let mut fired: Vec<(u64, &str, &str)> = self
            .edges()
            .flat_map(|edge| edge.steps.iter().map(move |step| (*step, edge.from, edge.to)))
            .collect();
        fired.sort_unstable_by_key(|(step, _, _)| *step);

        let mut path = Vec::with_capacity(fired.len() + 1);
        if let Some((_, from, _)) = fired.first() {
            path.push(*from);
        }
        path.extend(fired.iter().map(|(_, _, to)| *to));
        path
    }

    /// Check the structural invariants of the history.
    ///
    /// Every edge holds at least one step, steps on an edge are strictly
    /// increasing, and the union of all steps is exactly `1..=step`.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = Vec::with_capacity(self.transition_count());
        for edge in self.edges() {
            if edge.steps.is_empty() {
                return Err(format!("edge {} -> {} has no steps", edge.from, edge.to));
            }
            if edge.steps.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(format!(
                    "steps on edge {} -> {} are not strictly increasing",
                    edge.from, edge.to
                ));
            }
            seen.extend_from_slice(edge.steps);
        }

        seen.sort_unstable();
        let contiguous = seen.iter().copied().eq(1..=self.step);
        if !contiguous {
            return Err(format!(
                "recorded steps do not form the range 1..={}",
                self.step
            ));
        }
        Ok(())
    }
}
