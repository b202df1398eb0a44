//! Driving loop of a run.

use super::outcome::{Outcome, Rejection};
use crate::automaton::{ConfigError, Dfa};
use crate::core::{Computation, ContinuingFn, Letter, RunHistory, Shape, State, Step, Target};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Validated beginning of a run.
enum Start {
    /// The start state is terminal; nothing runs.
    Terminal(State),
    /// The start state needs its initial computation.
    Continuing(State, ContinuingFn),
}

/// How the letter feed of a run ended early.
#[derive(Clone, Copy)]
enum Closure {
    Stopped,
    Dropped,
}

impl Dfa {
    /// Run the automaton, executing each state's computation on tokio's
    /// blocking pool while this future drives the transitions.
    ///
    /// `init` is the computation of the start state. It is never invoked
    /// when the start state is terminal; otherwise it must be continuing.
    /// The future completes with exactly one [`Outcome`]. When the final
    /// state is terminal its effect-only computation has finished by then.
    ///
    /// [`Dfa::stop`] closes the feed. A letter already handed off when the
    /// stop arrives is still consumed; the run then finishes in the state
    /// it leads to.
    ///
    /// Configuration errors are returned before anything is scheduled.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa::automaton::Dfa;
    /// use dfa::core::{Computation, Letter, State};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let mut dfa = Dfa::new();
    /// dfa.set_start_state("working");
    /// dfa.set_terminal_states(["done"]);
    /// dfa.add_transition("working", "finished", "done", Computation::terminal(|| {}))
    ///     .unwrap();
    ///
    /// let outcome = dfa
    ///     .run(Computation::continuing(|| Letter::new("finished")))
    ///     .await
    ///     .unwrap();
    ///
    /// assert!(outcome.is_accepted());
    /// assert_eq!(outcome.state(), &State::new("done"));
    /// # }
    /// ```
    pub async fn run(&self, init: Computation) -> Result<Outcome, ConfigError> {
        let start = self.prepare(init)?;
        let mut armed = self.stop_slot().arm()?;

        let outcome = match start {
            Start::Terminal(state) => Outcome::accepted(state.clone(), RunHistory::new(state)),
            Start::Continuing(state, init) => {
                let mut current = state.clone();
                let mut history = RunHistory::new(state);
                self.enter(&current);
                let mut feed = hand_off(init);
                let mut stopping = false;

                loop {
                    let letter = tokio::select! {
                        biased;
                        _ = &mut armed.signal => match feed.try_recv() {
                            // Handed off before the stop; consume it, then finish.
                            Ok(letter) => {
                                stopping = true;
                                letter
                            }
                            Err(_) => break self.closed(current, history, Closure::Stopped),
                        },
                        received = &mut feed => match received {
                            Ok(letter) => letter,
                            Err(_) => break self.closed(current, history, Closure::Dropped),
                        },
                    };

                    let target = match self.transit(current, letter, history) {
                        Ok((target, extended)) => {
                            history = extended;
                            target
                        }
                        Err(outcome) => break outcome,
                    };
                    current = target.to.clone();

                    match &target.computation {
                        Computation::Continuing(_) if stopping => {
                            break self.closed(current, history, Closure::Stopped)
                        }
                        Computation::Continuing(next) => feed = hand_off(Arc::clone(next)),
                        Computation::Terminal(effect) => {
                            let effect = Arc::clone(effect);
                            if let Err(err) = tokio::task::spawn_blocking(move || effect()).await {
                                tracing::error!(
                                    state = %current,
                                    error = %err,
                                    "terminal computation failed"
                                );
                            }
                            break Outcome::accepted(current, history);
                        }
                    }
                }
            }
        };

        drop(armed);
        report(&outcome);
        Ok(outcome)
    }

    /// Run the automaton with every computation invoked inline on the
    /// calling thread.
    ///
    /// Same contract as [`Dfa::run`] without a runtime. [`Dfa::stop`] is
    /// honoured between steps: the letter of the computation running when
    /// the stop arrives is dropped. A panicking computation unwinds through
    /// this call.
    pub fn run_synchronous(&self, init: Computation) -> Result<Outcome, ConfigError> {
        let start = self.prepare(init)?;
        let mut armed = self.stop_slot().arm()?;

        let outcome = match start {
            Start::Terminal(state) => Outcome::accepted(state.clone(), RunHistory::new(state)),
            Start::Continuing(state, init) => {
                let mut current = state.clone();
                let mut history = RunHistory::new(state);
                self.enter(&current);
                let mut next = init;

                loop {
                    let letter = next();
                    if armed.stopped() {
                        tracing::debug!(
                            letter = %letter,
                            "letter produced after the feed closed, dropping it"
                        );
                        break self.closed(current, history, Closure::Stopped);
                    }

                    let target = match self.transit(current, letter, history) {
                        Ok((target, extended)) => {
                            history = extended;
                            target
                        }
                        Err(outcome) => break outcome,
                    };
                    current = target.to.clone();

                    match &target.computation {
                        Computation::Continuing(f) => next = Arc::clone(f),
                        Computation::Terminal(effect) => {
                            effect();
                            break Outcome::accepted(current, history);
                        }
                    }
                }
            }
        };

        drop(armed);
        report(&outcome);
        Ok(outcome)
    }

    fn prepare(&self, init: Computation) -> Result<Start, ConfigError> {
        let start = self.validate()?.clone();
        if self.is_terminal(&start) {
            return Ok(Start::Terminal(start));
        }
        match init {
            Computation::Continuing(f) => Ok(Start::Continuing(start, f)),
            Computation::Terminal(_) => Err(ConfigError::ShapeMismatch {
                expected: self.initial_shape(&start),
                found: Shape::Terminal,
                state: start,
            }),
        }
    }

    /// Consume one letter from `from`: reject it, or record the step, enter
    /// the target state and return its table entry.
    fn transit(
        &self,
        from: State,
        letter: Letter,
        history: RunHistory,
    ) -> Result<(&Target, RunHistory), Outcome> {
        if !self.in_alphabet(&letter) {
            return Err(Outcome::rejected(
                from,
                Rejection::UnknownLetter { letter },
                history,
            ));
        }
        let Some(target) = self.transitions().get(&letter, &from) else {
            return Err(Outcome::rejected(
                from.clone(),
                Rejection::NoTransition {
                    letter,
                    state: from,
                },
                history,
            ));
        };

        let history = history.record(Step {
            from,
            letter,
            to: target.to.clone(),
            timestamp: Utc::now(),
        });
        self.enter(&target.to);
        Ok((target, history))
    }

    /// Finish a run whose feed ended before a terminal state was reached.
    fn closed(&self, state: State, history: RunHistory, closure: Closure) -> Outcome {
        if self.is_terminal(&state) {
            return Outcome::accepted(state, history);
        }
        let cause = match closure {
            Closure::Stopped => Rejection::Stopped {
                state: state.clone(),
            },
            Closure::Dropped => Rejection::FeedClosed {
                state: state.clone(),
            },
        };
        Outcome::rejected(state, cause, history)
    }
}

/// Launch a continuing computation and return the slot its letter lands in.
///
/// The task is detached; the driving loop only waits on the slot. If the
/// slot was dropped by the time the letter is ready, the letter is dropped.
fn hand_off(computation: ContinuingFn) -> oneshot::Receiver<Letter> {
    let (sender, slot) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let letter = computation();
        if let Err(letter) = sender.send(letter) {
            tracing::debug!(letter = %letter, "letter produced after the feed closed, dropping it");
        }
    });
    slot
}

fn report(outcome: &Outcome) {
    match outcome.cause() {
        None => tracing::info!(
            state = %outcome.state(),
            steps = outcome.history().len(),
            "run accepted"
        ),
        Some(cause) => tracing::info!(
            state = %outcome.state(),
            steps = outcome.history().len(),
            cause = %cause,
            "run rejected"
        ),
    }
}
