//! Ghost State Machine
//!
//! A pacman ghost that wanders, chases, flees and returns to base until it
//! eats pacman or hits a glitch. The transitions taken are written to
//! `dot_graph.gv` in the directory given as the first argument (default: the
//! working directory). Render it with `dot -Tpng dot_graph.gv -o ghost.png`.
//!
//! Run with: cargo run --example ghost -- /tmp
//! Set RUST_LOG=debug to see every recorded transition.

use rand::Rng;
use stategraph::{state, Machine, Step};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn coin_flip() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

fn wander() -> Step<String> {
    if coin_flip() {
        // Spotted pacman
        Step::next(state!(chase))
    } else {
        // Pacman ate a power pellet
        Step::next(state!(flee))
    }
}

fn chase() -> Step<String> {
    match (coin_flip(), coin_flip()) {
        // Ate pacman, game over
        (true, true) => Step::end(),
        (true, false) => Step::next(state!(wander)),
        (false, true) => Step::fail("pacman glitch".to_string()),
        (false, false) => Step::next(state!(flee)),
    }
}

fn return_to_base() -> Step<String> {
    Step::next(state!(wander))
}

fn flee() -> Step<String> {
    if coin_flip() {
        // Power pellet expired
        Step::next(state!(wander))
    } else {
        // Eaten by pacman
        Step::next(state!(return_to_base))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = std::env::args().nth(1).unwrap_or_default();

    let mut machine = Machine::new();
    if let Err(err) = machine.log_state_transition_graph(&dir) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match machine.run(state!(wander)) {
        Ok(()) => {
            println!("game over: ghost ate pacman");
            println!("transitions: {}", machine.history().path().join(" -> "));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
