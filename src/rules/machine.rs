//! State machine: a cursor over a shared `RulesGraph`.

use std::sync::Arc;

use super::graph::{RulesGraph, State, StateId};
use crate::core::error::{CardError, Result};

/// Holds the current state of one participant walking a rules graph.
///
/// Several machines can share one graph; only the cursor is per machine.
#[derive(Clone, Debug)]
pub struct StateMachine {
    graph: Arc<RulesGraph>,
    current: StateId,
}

impl StateMachine {
    /// Create a machine positioned at the graph's start state.
    #[must_use]
    pub fn new(graph: Arc<RulesGraph>) -> Self {
        let current = graph.start();
        Self { graph, current }
    }

    /// The graph being walked.
    #[must_use]
    pub fn graph(&self) -> &Arc<RulesGraph> {
        &self.graph
    }

    /// The current state.
    #[must_use]
    pub fn current(&self) -> &State {
        self.graph.get(self.current)
    }

    /// Name of the current state.
    #[must_use]
    pub fn current_name(&self) -> &str {
        self.current().name()
    }

    /// Follow a transition and return the new current state.
    ///
    /// On error the current state is unchanged.
    pub fn next(&mut self, name: Option<&str>) -> Result<&State> {
        let from = self.current;
        let to = self.graph.get(from).next(name)?;
        self.current = to;

        tracing::debug!(
            from = self.graph.get(from).name(),
            via = name.unwrap_or("<default>"),
            to = self.graph.get(to).name(),
            "state transition"
        );
        Ok(self.graph.get(to))
    }

    /// Return to the start state.
    pub fn reset(&mut self) {
        self.current = self.graph.start();
    }

    /// Jump directly to a named state, ignoring edges.
    pub fn at(&mut self, name: &str) -> Result<&State> {
        let id = self
            .graph
            .find(name)
            .map(State::id)
            .ok_or_else(|| CardError::not_existent(format!("StateMachine.at - no state {}", name)))?;
        self.current = id;
        Ok(self.graph.get(id))
    }
}
