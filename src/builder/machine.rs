//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::engine::Machine;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

/// Transition tracing configuration.
///
/// All fields default, so a config file only needs the keys it sets.
///
/// # Example
///
/// ```rust
/// use stategraph::builder::TraceConfig;
///
/// let config: TraceConfig = serde_json::from_str(r#"{ "record": true }"#).unwrap();
/// assert!(config.record);
/// assert!(config.graph_dir.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Record transitions in memory even without a graph sink
    pub record: bool,

    /// Directory to write `dot_graph.gv` into; empty means the working directory
    pub graph_dir: Option<PathBuf>,
}

/// Builder for constructing machines with a fluent API.
#[derive(Default)]
pub struct MachineBuilder {
    config: TraceConfig,
    sink: Option<Box<dyn Write + Send>>,
}

impl MachineBuilder {
    /// Create a new builder with tracing disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: TraceConfig) -> Self {
        Self { config, sink: None }
    }

    /// Record transitions in memory.
    pub fn record_transitions(mut self) -> Self {
        self.config.record = true;
        self
    }

    /// Write the transition graph to `<dir>/dot_graph.gv`.
    pub fn log_graph_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.graph_dir = Some(dir.into());
        self
    }

    /// Write the transition graph to `writer`.
    pub fn graph_sink<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    /// Build the machine.
    ///
    /// Creates the graph file when a directory was configured.
    pub fn build(self) -> Result<Machine, BuildError> {
        let mut machine = Machine::new();
        if self.config.record {
            machine.record_transitions();
        }

        match (self.config.graph_dir, self.sink) {
            (Some(_), Some(_)) => return Err(BuildError::ConflictingSinks),
            (Some(dir), None) => machine.log_state_transition_graph(dir)?,
            (None, Some(writer)) => machine.with_graph_sink(writer)?,
            (None, None) => {}
        }

        Ok(machine)
    }
}
