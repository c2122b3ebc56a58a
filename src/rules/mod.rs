//! Rules engine: named states joined by named transitions.
//!
//! A game's legal phase sequence is a `RulesGraph`, built once and shared
//! behind an `Arc`. Each participant walks it with its own `StateMachine`.
//!
//! ## Key Types
//!
//! - `RulesGraph` / `GraphBuilder`: immutable adjacency built from
//!   `(from, via, to)` triples
//! - `State`: a node; `next(Some(name))` follows a named edge, `next(None)`
//!   the default edge
//! - `StateMachine`: the per-participant cursor
//! - `poker`: the Texas hold'em hand cycle

pub mod graph;
pub mod machine;
pub mod poker;

pub use graph::{GraphBuilder, RulesGraph, State, StateId};
pub use machine::StateMachine;
pub use poker::{poker_graph, shared_poker_graph, HAND_CYCLE};
