//! Worker Lifecycle
//!
//! This example drives a message-sending worker through registration,
//! group membership, sending with retries, and exit.
//!
//! Key concepts:
//! - Retries expressed as self-loop transitions
//! - Computations running concurrently with the driving loop
//! - Transition logging through a caller-supplied sink
//! - GraphViz export of the transition table
//!
//! Run with: RUST_LOG=debug cargo run --example worker_lifecycle

use dfa::{Computation, Dfa, Letter, State};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Worker Lifecycle Example ===\n");

    let sends = Arc::new(AtomicUsize::new(0));

    let register = Computation::continuing(|| Letter::new("register-success"));
    let join = Computation::continuing(|| Letter::new("group-join-success"));
    let send = {
        let sends = Arc::clone(&sends);
        Computation::continuing(move || match sends.fetch_add(1, Ordering::SeqCst) {
            0 | 1 => Letter::new("send-success"),
            2 | 3 => Letter::new("send-failure"),
            4 => Letter::new("send-success"),
            _ => Letter::new("exit-wanted"),
        })
    };
    let exit = Computation::terminal(|| println!("worker exiting"));

    let mut worker = Dfa::new();
    worker.set_start_state("registering");
    worker.set_terminal_states(["exiting", "terminating"]);
    worker.set_transition_logger(|s: &State| println!("  -> {s}"));

    worker.add_transition("registering", "register-success", "waiting", join)?;
    worker.add_transition("registering", "register-failure", "exiting", exit.clone())?;
    worker.add_transition("registering", "exit-wanted", "exiting", exit.clone())?;

    worker.add_transition("waiting", "group-join-success", "running", send.clone())?;
    worker.add_transition("waiting", "group-join-failure", "exiting", exit.clone())?;
    worker.add_transition("waiting", "exit-wanted", "exiting", exit.clone())?;

    worker.add_transition("running", "send-success", "running", send.clone())?;
    worker.add_transition("running", "send-failure", "resending", send.clone())?;
    worker.add_transition("running", "exit-wanted", "exiting", exit.clone())?;
    worker.add_transition("running", "done-success", "terminating", exit.clone())?;

    worker.add_transition("resending", "send-success", "running", send.clone())?;
    worker.add_transition("resending", "send-failure", "resending", send)?;
    worker.add_transition("resending", "exit-wanted", "exiting", exit)?;

    let outcome = worker.run(register).await?;

    println!("\nFinal state: {}", outcome.state());
    println!("Accepted: {}", outcome.is_accepted());
    println!("Sends attempted: {}", sends.load(Ordering::SeqCst));
    if let Some(duration) = outcome.history().duration() {
        println!("Elapsed between first and last step: {duration:?}");
    }

    println!("\n{}", worker.graphviz());

    println!("\n=== Example Complete ===");
    Ok(())
}
