//! Builder for constructing automata.

use crate::automaton::{ConfigError, Dfa};
use crate::core::{Computation, Letter, State};

struct PendingTransition {
    from: State,
    letter: Letter,
    to: State,
    computation: Computation,
}

/// Builder for constructing an automaton with a fluent API.
///
/// Unlike the setters on [`Dfa`], the order of calls does not matter: the
/// terminal set is applied before any transition is registered, and `build`
/// checks every precondition of a run.
pub struct DfaBuilder {
    start: Option<State>,
    terminals: Vec<State>,
    transitions: Vec<PendingTransition>,
    logger: Option<Box<dyn Fn(&State) + Send + Sync>>,
}

impl DfaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            terminals: Vec::new(),
            transitions: Vec::new(),
            logger: None,
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<State>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Add terminal states (at least one required).
    pub fn terminals<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.terminals.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition.
    pub fn transition(
        mut self,
        from: impl Into<State>,
        letter: impl Into<Letter>,
        to: impl Into<State>,
        computation: Computation,
    ) -> Self {
        self.transitions.push(PendingTransition {
            from: from.into(),
            letter: letter.into(),
            to: to.into(),
            computation,
        });
        self
    }

    /// Set the transition logger (optional).
    pub fn logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&State) + Send + Sync + 'static,
    {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Build the automaton.
    /// Returns the first configuration error encountered.
    pub fn build(self) -> Result<Dfa, ConfigError> {
        let mut dfa = Dfa::new();
        dfa.set_terminal_states(self.terminals);
        if let Some(start) = self.start {
            dfa.set_start_state(start);
        }
        for t in self.transitions {
            dfa.add_transition(t.from, t.letter, t.to, t.computation)?;
        }
        if let Some(logger) = self.logger {
            dfa.set_transition_logger(logger);
        }

        dfa.validate()?;
        Ok(dfa)
    }
}

impl Default for DfaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{emit, noop};

    #[test]
    fn builder_validates_start_state() {
        let result = DfaBuilder::new()
            .terminals(["done"])
            .transition("idle", "finish", "done", noop())
            .build();

        assert!(matches!(result, Err(ConfigError::MissingStartState)));
    }

    #[test]
    fn builder_requires_terminal_states() {
        let result = DfaBuilder::new()
            .start("idle")
            .transition("idle", "again", "idle", emit("again"))
            .build();

        assert!(matches!(result, Err(ConfigError::MissingTerminalStates)));
    }

    #[test]
    fn terminal_order_does_not_matter() {
        let dfa = DfaBuilder::new()
            .start("idle")
            .transition("idle", "finish", "done", noop())
            .terminals(["done"])
            .build()
            .unwrap();

        assert!(dfa.is_terminal(&State::new("done")));
        assert_eq!(dfa.start_state(), Some(&State::new("idle")));
    }

    #[test]
    fn shape_mismatch_surfaces_from_build() {
        let result = DfaBuilder::new()
            .start("idle")
            .terminals(["done"])
            .transition("idle", "finish", "done", emit("finish"))
            .build();

        assert!(matches!(result, Err(ConfigError::ShapeMismatch { .. })));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let dfa = DfaBuilder::new()
            .start("idle")
            .terminals(["done"])
            .transition("idle", "work", "busy", emit("finish"))
            .transition("busy", "finish", "done", noop())
            .logger(|_| {})
            .build()
            .unwrap();

        assert_eq!(dfa.states().len(), 3);
        assert_eq!(dfa.alphabet().len(), 2);
        assert_eq!(dfa.transitions().len(), 2);
    }
}
