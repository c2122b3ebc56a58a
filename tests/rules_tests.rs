//! Rules graph and poker state machine integration tests.

use std::sync::Arc;

use rust_cardtable::core::CardError;
use rust_cardtable::rules::poker::tags;
use rust_cardtable::rules::{poker_graph, GraphBuilder, RulesGraph, StateMachine, HAND_CYCLE};

// =============================================================================
// Poker Cycle Tests
// =============================================================================

/// Test the named walk through one hand.
#[test]
fn test_named_walk_through_hand() {
    let mut machine = StateMachine::poker();
    assert_eq!(machine.current_name(), tags::IDLING);

    let named = [
        tags::SHUFFLING,
        tags::DEALING,
        tags::BETTING_ON_DEALING,
        tags::FLOP,
        tags::BETTING_ON_FLOP,
        tags::RIVER,
        tags::BETTING_ON_RIVER,
        tags::TURN,
        tags::BETTING_ON_TURN,
        tags::FINISHING,
        tags::RETURNING,
    ];
    for name in named {
        assert_eq!(machine.next(Some(name)).unwrap().name(), name);
    }

    // Eleven named steps reach Returning; the cycle closes on Idling.
    assert_eq!(machine.current_name(), tags::RETURNING);
    assert_eq!(machine.next(Some(tags::IDLING)).unwrap().name(), tags::IDLING);
}

/// Test the default walk repeats the same cycle indefinitely.
#[test]
fn test_default_walk_cycles() {
    let mut machine = StateMachine::poker();
    for _ in 0..3 {
        for expected in HAND_CYCLE {
            assert_eq!(machine.next(None).unwrap().name(), expected);
        }
    }
}

/// Test Idling loops to itself only when asked by name.
#[test]
fn test_idling_self_loop() {
    let mut machine = StateMachine::poker();
    machine.next(Some(tags::IDLING)).unwrap();
    assert_eq!(machine.current_name(), tags::IDLING);
    machine.next(None).unwrap();
    assert_eq!(machine.current_name(), tags::SHUFFLING);
}

/// Test an unregistered transition fails and keeps the state.
#[test]
fn test_unknown_transition_keeps_state() {
    let mut machine = StateMachine::poker();
    machine.next(None).unwrap();

    for bad in [tags::FLOP, tags::IDLING, "Showdown", ""] {
        let err = machine.next(Some(bad)).unwrap_err();
        assert!(matches!(err, CardError::NotExistent(_)));
        assert_eq!(machine.current_name(), tags::SHUFFLING);
    }
}

/// Test reset returns to Idling from anywhere.
#[test]
fn test_reset() {
    let mut machine = StateMachine::poker();
    machine.at(tags::TURN).unwrap();
    machine.reset();
    assert_eq!(machine.current_name(), tags::IDLING);
}

/// Test the graph lists every phase once.
#[test]
fn test_poker_graph_states() {
    let graph = poker_graph();
    assert_eq!(graph.len(), 12);
    for name in HAND_CYCLE {
        assert_eq!(graph.find(name).unwrap().name(), name);
    }
    assert!(graph.find("Showdown").is_none());
}

// =============================================================================
// Custom Graph Tests
// =============================================================================

/// Test a custom graph with branches, driven by several machines.
#[test]
fn test_custom_graph_with_branches() {
    let graph = RulesGraph::from_table(&[
        ("lobby", "start", "playing"),
        ("playing", "pause", "paused"),
        ("playing", "quit", "lobby"),
        ("paused", "resume", "playing"),
    ])
    .unwrap();
    let graph = Arc::new(graph);

    let mut host = StateMachine::new(Arc::clone(&graph));
    let mut guest = StateMachine::new(graph);

    host.next(None).unwrap();
    assert_eq!(host.next(Some("pause")).unwrap().name(), "paused");
    assert_eq!(guest.current_name(), "lobby");

    guest.next(Some("start")).unwrap();
    assert_eq!(guest.next(None).unwrap().name(), "paused");
}

/// Test builder default edges on a custom graph.
#[test]
fn test_builder_default_edge() {
    let mut builder = GraphBuilder::new();
    builder.edge("wait", "wait", "wait").unwrap();
    builder.default_edge("wait", "go", "run").unwrap();
    builder.edge("run", "wait", "wait").unwrap();

    let mut machine = StateMachine::new(Arc::new(builder.build().unwrap()));
    assert_eq!(machine.next(None).unwrap().name(), "run");
    assert_eq!(machine.next(None).unwrap().name(), "wait");
    assert_eq!(machine.next(Some("wait")).unwrap().name(), "wait");
}
