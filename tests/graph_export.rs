//! Graph export against real files.

use stategraph::core::{State, Step};
use stategraph::graph::{GraphError, DOT_FOOTER, DOT_HEADER};
use stategraph::{state, Machine, MachineBuilder, MachineError};
use std::fs;

fn wander() -> Step<String> {
    Step::next(state!(chase))
}

fn chase() -> Step<String> {
    Step::next(state!(flee))
}

fn flee() -> Step<String> {
    Step::end()
}

fn glitch() -> Step<String> {
    Step::fail("error: pacman glitch".to_string())
}

#[test]
fn run_writes_dot_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut machine = Machine::new();
    machine.log_state_transition_graph(dir.path()).unwrap();

    machine.run(state!(wander)).unwrap();

    let dot = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();
    let expected = format!(
        "{DOT_HEADER}\
         \tchase -> flee [label=\" 3\", fontsize=10]\n\
         \tflee -> end [label=\" 4\", fontsize=10]\n\
         \tstart -> wander [label=\" 1\", fontsize=10]\n\
         \twander -> chase [label=\" 2\", fontsize=10]\n\
         {DOT_FOOTER}"
    );
    assert_eq!(dot, expected);
}

#[test]
fn graph_file_is_created_on_enable() {
    let dir = tempfile::tempdir().unwrap();
    let mut machine = Machine::new();
    machine.log_state_transition_graph(dir.path()).unwrap();

    let path = dir.path().join("dot_graph.gv");
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn trailing_slash_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let with_slash = format!("{}/", dir.path().display());
    let mut machine = Machine::new();
    machine.log_state_transition_graph(&with_slash).unwrap();

    machine.run(state!(flee)).unwrap();

    let dot = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();
    assert!(dot.contains("\tstart -> flee [label=\" 1\", fontsize=10]\n"));
    assert!(dot.contains("\tflee -> end [label=\" 2\", fontsize=10]\n"));
}

#[test]
fn missing_directory_leaves_export_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let mut machine = Machine::new();

    let err = machine.log_state_transition_graph(&missing).unwrap_err();

    assert!(matches!(err, GraphError::SinkCreationFailed { .. }));
    assert!(!machine.is_recording());

    machine.run(state!(wander)).unwrap();
    assert!(machine.history().is_empty());
}

#[test]
fn failed_run_still_writes_graph() {
    let dir = tempfile::tempdir().unwrap();
    let mut machine = Machine::new();
    machine.log_state_transition_graph(dir.path()).unwrap();

    let err = machine.run(State::new("chase", glitch)).unwrap_err();

    assert_eq!(
        err.handler_error().map(String::as_str),
        Some("error: pacman glitch")
    );
    let dot = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();
    assert!(dot.contains("\tchase -> end [label=\" 2\", fontsize=10]\n"));
}

#[test]
fn repeated_edges_share_one_line() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static VISITS: AtomicUsize = AtomicUsize::new(0);

    fn patrol() -> Step<String> {
        if VISITS.fetch_add(1, Ordering::SeqCst) < 2 {
            Step::next(state!(rest))
        } else {
            Step::end()
        }
    }

    fn rest() -> Step<String> {
        Step::next(state!(patrol))
    }

    let dir = tempfile::tempdir().unwrap();
    let mut machine = MachineBuilder::new()
        .log_graph_to(dir.path())
        .build()
        .unwrap();

    machine.run(state!(patrol)).unwrap();

    let dot = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();
    assert!(dot.contains("\tpatrol -> rest [label=\" 2,4\", fontsize=10]\n"));
    assert!(dot.contains("\trest -> patrol [label=\" 3,5\", fontsize=10]\n"));
    assert!(dot.contains("\tpatrol -> end [label=\" 6\", fontsize=10]\n"));
    assert_eq!(dot.matches(" -> ").count(), 4);
}

#[test]
fn second_run_does_not_rewrite_graph() {
    let dir = tempfile::tempdir().unwrap();
    let mut machine = Machine::new();
    machine.log_state_transition_graph(dir.path()).unwrap();
    machine.run(state!(flee)).unwrap();
    let first = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();

    let err = machine.run(state!(wander)).unwrap_err();

    assert!(matches!(err, MachineError::AlreadyRan));
    let second = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn snapshot_matches_rendered_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut machine = Machine::new();
    machine.log_state_transition_graph(dir.path()).unwrap();
    machine.run(state!(wander)).unwrap();

    let snapshot = machine.snapshot();
    let dot = fs::read_to_string(dir.path().join("dot_graph.gv")).unwrap();

    assert_eq!(snapshot.history.to_dot(), dot);
    assert_eq!(snapshot.history.step(), 4);
}

#[test]
fn enabling_export_after_untraced_run_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dot_graph.gv");
    fs::write(&path, "previous graph").unwrap();

    let mut machine = Machine::new();
    machine.run(state!(flee)).unwrap();
    let err = machine.log_state_transition_graph(dir.path()).unwrap_err();

    assert!(matches!(err, GraphError::ExportClosed));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous graph");
}
