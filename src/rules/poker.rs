//! Texas hold'em hand cycle.
//!
//! ```text
//! Idling ─▶ Shuffling ─▶ Dealing ─▶ Betting_onDealing ─▶ Flop ─▶ Betting_onFlop
//!   ▲ ↺                                                                  │
//!   │                                                                    ▼
//! Returning ◀─ Finishing ◀─ Betting_onTurn ◀─ Turn ◀─ Betting_onRiver ◀─ River
//! ```
//!
//! Every transition is named after its target state. `Idling` can loop onto
//! itself, but only when asked by name; its default moves on to `Shuffling`.

use std::sync::{Arc, OnceLock};

use super::graph::{GraphBuilder, RulesGraph};
use super::machine::StateMachine;
use crate::core::error::Result;

/// State and transition names.
pub mod tags {
    pub const IDLING: &str = "Idling";
    pub const SHUFFLING: &str = "Shuffling";
    pub const DEALING: &str = "Dealing";
    pub const BETTING_ON_DEALING: &str = "Betting_onDealing";
    pub const FLOP: &str = "Flop";
    pub const BETTING_ON_FLOP: &str = "Betting_onFlop";
    pub const RIVER: &str = "River";
    pub const BETTING_ON_RIVER: &str = "Betting_onRiver";
    pub const TURN: &str = "Turn";
    pub const BETTING_ON_TURN: &str = "Betting_onTurn";
    pub const FINISHING: &str = "Finishing";
    pub const RETURNING: &str = "Returning";
}

use tags::*;

/// One hand, in order, starting after `Idling`.
pub const HAND_CYCLE: [&str; 12] = [
    SHUFFLING,
    DEALING,
    BETTING_ON_DEALING,
    FLOP,
    BETTING_ON_FLOP,
    RIVER,
    BETTING_ON_RIVER,
    TURN,
    BETTING_ON_TURN,
    FINISHING,
    RETURNING,
    IDLING,
];

/// Build a fresh poker graph.
#[must_use]
pub fn poker_graph() -> RulesGraph {
    // The table is fixed; a failure here is a defect in this file.
    build_poker_graph().unwrap_or_else(|err| panic!("poker graph table is malformed: {err}"))
}

fn build_poker_graph() -> Result<RulesGraph> {
    let mut builder = GraphBuilder::new();
    builder.start(IDLING);
    builder.edge(IDLING, IDLING, IDLING)?;
    builder.default_edge(IDLING, SHUFFLING, SHUFFLING)?;

    for pair in HAND_CYCLE.windows(2) {
        builder.edge(pair[0], pair[1], pair[1])?;
    }
    builder.build()
}

/// The shared poker graph.
#[must_use]
pub fn shared_poker_graph() -> Arc<RulesGraph> {
    static GRAPH: OnceLock<Arc<RulesGraph>> = OnceLock::new();
    Arc::clone(GRAPH.get_or_init(|| Arc::new(poker_graph())))
}

impl StateMachine {
    /// A machine over the poker graph, positioned at `Idling`.
    #[must_use]
    pub fn poker() -> Self {
        StateMachine::new(shared_poker_graph())
    }
}
