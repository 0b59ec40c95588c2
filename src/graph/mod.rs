//! Transition graph export in DOT format.
//!
//! The machine renders its transition history once, at the end of a run, into
//! a sink attached beforehand. The output is a strict digraph named
//! `stategraph` that any Graphviz-compatible tool can render:
//!
//! ```text
//! strict digraph stategraph {
//!     start [shape="circle", color="green", style="filled"]
//!     end [shape="circle", color="red", style="filled"]
//!     Wander -> Chase [label=" 2,4", fontsize=10]
//!     ...
//! }
//! ```

mod dot;
mod error;
mod export;

pub use dot::{
    step_label, vertex_id, write_dot, DOT_FILE_EXTENSION, DOT_FILE_NAME, DOT_FOOTER, DOT_HEADER,
    DOT_KEYWORDS, STEP_FONT_SIZE,
};
pub use error::GraphError;
pub use export::{graph_file_path, GraphExport, GraphSink};
