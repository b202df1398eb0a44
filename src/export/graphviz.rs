//! GraphViz export of the transition table.

use crate::automaton::Dfa;
use std::fmt::Write;

impl Dfa {
    /// Render the transition table as a GraphViz `digraph`.
    ///
    /// One edge per table entry, labelled with its letter. Edge order is
    /// arbitrary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa::builder::{emit, noop, DfaBuilder};
    ///
    /// let dfa = DfaBuilder::new()
    ///     .start("running")
    ///     .terminals(["exiting"])
    ///     .transition("running", "retry", "running", emit("exit"))
    ///     .transition("running", "exit", "exiting", noop())
    ///     .build()
    ///     .unwrap();
    ///
    /// let viz = dfa.graphviz();
    /// assert!(viz.starts_with("digraph {\n"));
    /// assert!(viz.contains(r#""running" -> "running"[label="retry"];"#));
    /// ```
    pub fn graphviz(&self) -> String {
        let mut buf = String::from("digraph {\n");
        for (key, target) in self.transitions().iter() {
            // Writing into a String cannot fail.
            let _ = writeln!(
                buf,
                "    \"{}\" -> \"{}\"[label=\"{}\"];",
                key.from, target.to, key.letter
            );
        }
        buf.push('}');
        buf
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{emit, noop, DfaBuilder};

    #[test]
    fn empty_table_renders_empty_graph() {
        let dfa = crate::automaton::Dfa::new();
        assert_eq!(dfa.graphviz(), "digraph {\n}");
    }

    #[test]
    fn every_entry_becomes_an_edge() {
        let dfa = DfaBuilder::new()
            .start("starting")
            .terminals(["exiting"])
            .transition("starting", "everybody-started", "running", emit("exit"))
            .transition("starting", "exit", "exiting", noop())
            .transition("running", "exit", "exiting", noop())
            .build()
            .unwrap();

        let viz = dfa.graphviz();
        assert_eq!(viz.lines().count(), 5);
        assert!(viz.contains(r#""starting" -> "running"[label="everybody-started"];"#));
        assert!(viz.contains(r#""starting" -> "exiting"[label="exit"];"#));
        assert!(viz.contains(r#""running" -> "exiting"[label="exit"];"#));
        assert!(viz.ends_with('}'));
    }
}
