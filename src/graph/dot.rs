//! DOT rendering of a transition history.

use crate::core::TransitionHistory;
use std::io::{self, Write};

/// Name of the graph file written by the machine.
pub const DOT_FILE_NAME: &str = "dot_graph";

/// Extension of the graph file written by the machine.
pub const DOT_FILE_EXTENSION: &str = "gv";

/// DOT keywords, which are never valid as bare vertex identifiers in any letter case.
pub const DOT_KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Font size used for edge step labels.
pub const STEP_FONT_SIZE: u32 = 10;

/// Opening of the graph, with the synthetic `start` and `end` vertices pre-styled.
pub const DOT_HEADER: &str = "
strict digraph stategraph {
\tstart [shape=\"circle\", color=\"green\", style=\"filled\"]
\tend [shape=\"circle\", color=\"red\", style=\"filled\"]
";

/// Closing of the graph.
pub const DOT_FOOTER: &str = "}\n";

/// Write `history` as a DOT digraph.
///
/// One line is emitted per recorded edge, labelled with the comma-joined
/// steps at which it fired. Writes go straight to `writer`; nothing is rolled
/// back if a write fails part way through.
pub fn write_dot<W: Write + ?Sized>(history: &TransitionHistory, writer: &mut W) -> io::Result<()> {
    writer.write_all(DOT_HEADER.as_bytes())?;
    for edge in history.edges() {
        writeln!(
            writer,
            "\t{} -> {} [label=\" {}\", fontsize={}]",
            vertex_id(edge.from),
            vertex_id(edge.to),
            step_label(edge.steps),
            STEP_FONT_SIZE
        )?;
    }
    writer.write_all(DOT_FOOTER.as_bytes())
}

/// Comma-joined step numbers, in recording order.
pub fn step_label(steps: &[u64]) -> String {
    steps
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Vertex identifier as it appears in the DOT text.
///
/// Plain identifiers are written as-is; keywords and anything else are quoted.
pub fn vertex_id(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !DOT_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(name));

    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl TransitionHistory {
    /// Render the history to a DOT string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stategraph::core::TransitionHistory;
    ///
    /// let mut history = TransitionHistory::new();
    /// history.record("start", "Idle");
    /// history.record("Idle", "end");
    ///
    /// let dot = history.to_dot();
    /// assert!(dot.contains("strict digraph stategraph {"));
    /// assert!(dot.contains("\tIdle -> end [label=\" 2\", fontsize=10]\n"));
    /// ```
    pub fn to_dot(&self) -> String {
        let mut buf = Vec::new();
        // Vec<u8> never fails to accept writes.
        let _ = write_dot(self, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
