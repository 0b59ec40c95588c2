//! Graph export lifecycle and sinks.

use super::dot::{write_dot, DOT_FILE_EXTENSION, DOT_FILE_NAME};
use super::error::GraphError;
use crate::core::TransitionHistory;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::mem;
use std::path::{Path, PathBuf};

/// Destination for the rendered graph.
pub enum GraphSink {
    /// A file created when export was enabled
    File { path: PathBuf, file: File },

    /// Any caller-supplied writer
    Writer(Box<dyn Write + Send>),
}

impl GraphSink {
    /// Create `<dir>/dot_graph.gv`, truncating any existing file.
    ///
    /// An empty `dir` means the current working directory.
    pub fn create_in(dir: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = graph_file_path(dir.as_ref());
        match File::create(&path) {
            Ok(file) => Ok(GraphSink::File { path, file }),
            Err(source) => Err(GraphError::SinkCreationFailed { path, source }),
        }
    }

    /// Wrap an arbitrary writer.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        GraphSink::Writer(Box::new(writer))
    }

    /// Path of the graph file, if the sink is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            GraphSink::File { path, .. } => Some(path.as_path()),
            GraphSink::Writer(_) => None,
        }
    }

    /// Render `history` into the sink, consuming it.
    ///
    /// The sink is flushed before it is dropped.
    pub fn render(self, history: &TransitionHistory) -> Result<(), GraphError> {
        match self {
            GraphSink::File { file, .. } => write_buffered(history, file),
            GraphSink::Writer(writer) => write_buffered(history, writer),
        }
    }
}

fn write_buffered<W: Write>(history: &TransitionHistory, writer: W) -> Result<(), GraphError> {
    let mut out = BufWriter::new(writer);
    write_dot(history, &mut out)
        .and_then(|()| out.flush())
        .map_err(GraphError::SinkWriteFailed)
}

impl fmt::Debug for GraphSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphSink::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
            GraphSink::Writer(_) => f.write_str("Writer"),
        }
    }
}

/// Location of the graph file for a caller-supplied directory.
///
/// # Example
///
/// ```rust
/// use stategraph::graph::graph_file_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(graph_file_path(Path::new("")), PathBuf::from("./dot_graph.gv"));
/// assert_eq!(graph_file_path(Path::new("out/")), PathBuf::from("out/dot_graph.gv"));
/// ```
pub fn graph_file_path(dir: &Path) -> PathBuf {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    dir.join(format!("{DOT_FILE_NAME}.{DOT_FILE_EXTENSION}"))
}

/// Export state of a machine.
///
/// Export starts out disabled, becomes enabled once a sink is attached, and
/// ends up rendered after the run. There is no way back to disabled.
#[derive(Debug, Default)]
pub enum GraphExport {
    #[default]
    Disabled,
    Enabled(GraphSink),
    Rendered,
}

impl GraphExport {
    /// Attach a sink, replacing any sink attached earlier.
    pub fn enable(&mut self, sink: GraphSink) -> Result<(), GraphError> {
        if matches!(self, GraphExport::Rendered) {
            return Err(GraphError::ExportClosed);
        }
        *self = GraphExport::Enabled(sink);
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, GraphExport::Enabled(_))
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, GraphExport::Rendered)
    }

    /// Render into the attached sink, if any, and move to `Rendered`.
    ///
    /// Returns the file path written, when the sink was a file. Rendering
    /// while disabled is a no-op.
    pub fn render(&mut self, history: &TransitionHistory) -> Result<Option<PathBuf>, GraphError> {
        match mem::replace(self, GraphExport::Rendered) {
            GraphExport::Enabled(sink) => {
                let path = sink.path().map(Path::to_path_buf);
                sink.render(history)?;
                Ok(path)
            }
            previous => {
                *self = previous;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_history() -> TransitionHistory {
        let mut history = TransitionHistory::new();
        history.record("start", "A");
        history.record("A", "end");
        history
    }

    #[test]
    fn file_path_defaults_to_current_dir() {
        assert_eq!(graph_file_path(Path::new("")), PathBuf::from("./dot_graph.gv"));
    }

    #[test]
    fn file_path_tolerates_trailing_slash() {
        assert_eq!(
            graph_file_path(Path::new("graphs/")),
            graph_file_path(Path::new("graphs"))
        );
    }

    #[test]
    fn disabled_export_renders_nothing() {
        let mut export = GraphExport::default();
        assert_eq!(export.render(&sample_history()).unwrap(), None);
        assert!(!export.is_rendered());
    }

    #[test]
    fn enabled_export_renders_once() {
        let buf = SharedBuf::default();
        let mut export = GraphExport::default();
        export.enable(GraphSink::writer(buf.clone())).unwrap();
        assert!(export.is_enabled());

        export.render(&sample_history()).unwrap();
        assert!(export.is_rendered());

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, sample_history().to_dot());
    }

    #[test]
    fn enable_after_render_is_rejected() {
        let mut export = GraphExport::default();
        export.enable(GraphSink::writer(io::sink())).unwrap();
        export.render(&sample_history()).unwrap();

        let result = export.enable(GraphSink::writer(io::sink()));
        assert!(matches!(result, Err(GraphError::ExportClosed)));
    }

    #[test]
    fn missing_directory_fails_creation() {
        let result = GraphSink::create_in("/definitely/not/a/real/dir");
        match result {
            Err(GraphError::SinkCreationFailed { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/a/real/dir/dot_graph.gv"));
            }
            other => panic!("Expected SinkCreationFailed, got {:?}", other),
        }
    }
}
