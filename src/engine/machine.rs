//! State machine that runs named state handlers.

use crate::core::{state_name, State, TransitionHistory, START_STATE};
use crate::engine::error::MachineError;
use crate::graph::{GraphError, GraphExport, GraphSink};
use crate::snapshot::HistorySnapshot;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Finite-state machine runner.
///
/// A machine is good for a single run. Transitions are recorded only when
/// recording is enabled, either directly through
/// [`record_transitions`](Self::record_transitions) or by attaching a graph
/// sink.
///
/// # Example
///
/// ```rust
/// use stategraph::core::{State, Step};
/// use stategraph::engine::Machine;
///
/// fn ping() -> Step<String> {
///     Step::next(State::new("pong", pong))
/// }
///
/// fn pong() -> Step<String> {
///     Step::end()
/// }
///
/// let mut machine = Machine::new();
/// machine.record_transitions();
/// machine.run(State::new("ping", ping)).unwrap();
///
/// assert_eq!(machine.history().path(), vec!["start", "ping", "pong", "end"]);
/// ```
#[derive(Debug, Default)]
pub struct Machine {
    history: TransitionHistory,
    recording: bool,
    export: GraphExport,
    ran: bool,
}

impl Machine {
    /// Create a machine with an empty history and export disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record transitions in memory without exporting a graph.
    pub fn record_transitions(&mut self) {
        self.recording = true;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Check if the machine has already run.
    pub fn has_run(&self) -> bool {
        self.ran
    }

    /// Transition history recorded so far.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Versioned, serializable copy of the recorded history.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::capture(&self.history)
    }

    /// Log the state transition graph to `<path>/dot_graph.gv`.
    ///
    /// The file is created right away; its contents are written once the run
    /// reaches a terminal state or a handler fails. An empty `path` means the
    /// current working directory. Enables transition recording.
    ///
    /// Fails with [`GraphError::ExportClosed`] once the machine has run,
    /// without touching the file system.
    pub fn log_state_transition_graph(&mut self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        self.ensure_export_open()?;
        let sink = GraphSink::create_in(path)?;
        if let Some(path) = sink.path() {
            debug!(path = %path.display(), "Created state transition graph file");
        }
        self.attach(sink)
    }

    /// Render the state transition graph into `writer` at the end of the run.
    ///
    /// Enables transition recording. Fails with [`GraphError::ExportClosed`]
    /// once the machine has run.
    pub fn with_graph_sink<W: Write + Send + 'static>(&mut self, writer: W) -> Result<(), GraphError> {
        self.ensure_export_open()?;
        self.attach(GraphSink::writer(writer))
    }

    fn ensure_export_open(&self) -> Result<(), GraphError> {
        if self.ran || self.export.is_rendered() {
            return Err(GraphError::ExportClosed);
        }
        Ok(())
    }

    fn attach(&mut self, sink: GraphSink) -> Result<(), GraphError> {
        self.export.enable(sink)?;
        self.recording = true;
        Ok(())
    }

    /// Run the machine starting at `start`.
    ///
    /// Handlers are invoked one after another until a handler returns no next
    /// state (success) or reports a failure. On failure the loop stops at once,
    /// even if the handler also named a next state, and the handler's error is
    /// returned in [`MachineError::HandlerFailure`].
    ///
    /// If a graph sink is attached, the graph is rendered after the loop
    /// whatever the outcome. A rendering failure is returned only when no
    /// handler failed.
    pub fn run<E: Display>(
        &mut self,
        start: impl Into<Option<State<E>>>,
    ) -> Result<(), MachineError<E>> {
        let Some(start) = start.into() else {
            return Err(MachineError::InvalidArgument("start state must not be empty"));
        };
        if self.ran {
            return Err(MachineError::AlreadyRan);
        }
        self.ran = true;

        info!(start = start.name(), recording = self.recording, "Running state machine");
        let outcome = self.drive(start);

        let rendered = self.export.render(&self.history);
        match (outcome, rendered) {
            (Err(err), rendered) => {
                if let Err(render_err) = rendered {
                    error!(error = %render_err, "Failed to write state transition graph");
                }
                Err(MachineError::HandlerFailure(err))
            }
            (Ok(()), Err(render_err)) => {
                error!(error = %render_err, "Failed to write state transition graph");
                Err(render_err.into())
            }
            (Ok(()), Ok(path)) => {
                if let Some(path) = path {
                    info!(path = %path.display(), steps = self.history.step(), "State transition graph written");
                }
                info!(steps = self.history.step(), "State machine reached a terminal state");
                Ok(())
            }
        }
    }

    fn drive<E: Display>(&mut self, start: State<E>) -> Result<(), E> {
        self.record(START_STATE, start.name());

        let mut current = start;
        loop {
            if current.is_reserved() {
                warn!(state = current.name(), "State uses a reserved vertex name");
            }

            let (next, outcome) = current.call().into_parts();
            self.record(current.name(), state_name(next.as_ref()));

            if let Err(err) = outcome {
                warn!(state = current.name(), error = %err, "State handler failed");
                return Err(err);
            }

            match next {
                Some(state) => current = state,
                None => return Ok(()),
            }
        }
    }

    fn record(&mut self, from: &str, to: &str) {
        if !self.recording {
            return;
        }
        let step = self.history.record(from, to);
        debug!(from, to, step, "Recorded state transition");
    }
}
