//! Immutable rules graph.
//!
//! States are stored in a flat arena and addressed by `StateId`. Each state
//! keeps its outgoing edges in registration order, keyed by transition name.
//! The graph is assembled once through `GraphBuilder` (or from a table of
//! `(from, via, to)` triples) and never changes afterwards.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::error::{CardError, Result};

/// Index of a state in its `RulesGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

impl StateId {
    /// Raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named node with named outgoing edges.
#[derive(Clone, Debug)]
pub struct State {
    id: StateId,
    name: String,
    transitions: SmallVec<[(String, StateId); 2]>,
    default: Option<usize>,
}

impl State {
    fn new(id: StateId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            transitions: SmallVec::new(),
            default: None,
        }
    }

    /// This state's id.
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// This state's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges as `(transition name, target)`, in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, StateId)> + '_ {
        self.transitions.iter().map(|(name, to)| (name.as_str(), *to))
    }

    /// Check if an edge with this name exists.
    #[must_use]
    pub fn can(&self, name: &str) -> bool {
        self.transitions.iter().any(|(n, _)| n == name)
    }

    /// Resolve the target of a transition.
    ///
    /// With a name, follows the edge registered under exactly that name.
    /// Without one, follows the default edge: the one marked as default,
    /// otherwise the first registered.
    pub fn next(&self, name: Option<&str>) -> Result<StateId> {
        match name {
            Some(name) => self
                .transitions
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, to)| *to)
                .ok_or_else(|| {
                    CardError::not_existent(format!(
                        "State({}).next - transition {} is not registered",
                        self.name, name
                    ))
                }),
            None => self
                .transitions
                .get(self.default.unwrap_or(0))
                .map(|(_, to)| *to)
                .ok_or_else(|| {
                    CardError::not_existent(format!(
                        "State({}).next - no outgoing transition",
                        self.name
                    ))
                }),
        }
    }
}

/// Assembles a `RulesGraph`.
///
/// States are created on first mention; the first state mentioned is the
/// start state unless `start` is called.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    states: Vec<State>,
    by_name: FxHashMap<String, StateId>,
    start: Option<StateId>,
}

impl GraphBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state, returning its id.
    pub fn state(&mut self, name: &str) -> StateId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = StateId(self.states.len());
        self.states.push(State::new(id, name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Set the start state.
    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start = Some(self.state(name));
        self
    }

    /// Register the edge `from --via--> to`.
    pub fn edge(&mut self, from: &str, via: &str, to: &str) -> Result<&mut Self> {
        self.add_edge(from, via, to, false)?;
        Ok(self)
    }

    /// Register `from --via--> to` and make it `from`'s default edge.
    pub fn default_edge(&mut self, from: &str, via: &str, to: &str) -> Result<&mut Self> {
        self.add_edge(from, via, to, true)?;
        Ok(self)
    }

    fn add_edge(&mut self, from: &str, via: &str, to: &str, is_default: bool) -> Result<()> {
        let from_id = self.state(from);
        let to_id = self.state(to);
        let state = &mut self.states[from_id.0];

        if state.can(via) {
            return Err(CardError::not_valid(format!(
                "GraphBuilder.edge - {} already has a transition named {}",
                from, via
            )));
        }
        if is_default && state.default.is_some() {
            return Err(CardError::not_valid(format!(
                "GraphBuilder.default_edge - {} already has a default transition",
                from
            )));
        }

        if is_default {
            state.default = Some(state.transitions.len());
        }
        state.transitions.push((via.to_string(), to_id));
        Ok(())
    }

    /// Finish the graph.
    ///
    /// Fails with `NotValid` if no state was declared.
    pub fn build(self) -> Result<RulesGraph> {
        if self.states.is_empty() {
            return Err(CardError::not_valid("GraphBuilder.build - graph has no states"));
        }
        Ok(RulesGraph {
            start: self.start.unwrap_or(StateId(0)),
            states: self.states,
            by_name: self.by_name,
        })
    }
}

/// Directed graph of named states.
///
/// Cycles are allowed and there is no notion of a terminal state.
#[derive(Clone, Debug)]
pub struct RulesGraph {
    states: Vec<State>,
    by_name: FxHashMap<String, StateId>,
    start: StateId,
}

impl RulesGraph {
    /// Build from `(from, via, to)` triples in registration order.
    ///
    /// The first `from` is the start state.
    pub fn from_table(table: &[(&str, &str, &str)]) -> Result<Self> {
        let mut builder = GraphBuilder::new();
        for &(from, via, to) in table {
            builder.edge(from, via, to)?;
        }
        builder.build()
    }

    /// The start state.
    #[must_use]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Look up a state by id.
    pub fn state(&self, id: StateId) -> Result<&State> {
        self.states.get(id.0).ok_or_else(|| {
            CardError::not_existent(format!("RulesGraph.state - no state {}", id.0))
        })
    }

    /// Look up a state by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&State> {
        self.by_name.get(name).map(|id| &self.states[id.0])
    }

    /// Number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a built graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter().map(State::name)
    }

    pub(crate) fn get(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}
