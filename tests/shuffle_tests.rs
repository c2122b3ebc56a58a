//! Shuffle engine integration tests.

use proptest::prelude::*;
use rust_cardtable::cards::Catalog;
use rust_cardtable::core::{CardError, GameRng, ShuffleConfig, ShuffleMode};
use rust_cardtable::shuffle::{build_behaviors, BehaviorKind, Faked, Shuffler, UpSideDown};
use rust_cardtable::stack::{Deck, DeckKind, Stack};

fn ids(stack: &Stack) -> Vec<String> {
    stack.iter().map(|c| c.id()).collect()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

fn any_kind() -> impl Strategy<Value = BehaviorKind> {
    prop::sample::select(BehaviorKind::ALL.to_vec())
}

// =============================================================================
// Permutation Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any behavior, applied any number of times, only reorders cards.
    #[test]
    fn prop_behavior_is_permutation(
        kind in any_kind(),
        repetitions in 1usize..16,
        applications in 1usize..6,
        len in 0usize..=52,
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::french52(Catalog::standard()).unwrap();
        let mut stack = deck.stack_mut().pop_n(len.max(1)).unwrap();
        if len == 0 {
            stack.clear();
        }
        let before = sorted(ids(&stack));

        let behavior = kind.build(repetitions);
        let mut rng = GameRng::new(seed);
        for _ in 0..applications {
            behavior.shuffle(&mut stack, &mut rng);
        }

        prop_assert_eq!(stack.len(), before.len());
        prop_assert_eq!(sorted(ids(&stack)), before);
    }

    /// A random shuffler never changes the deck's contents.
    #[test]
    fn prop_shuffler_is_permutation(seed in any::<u64>(), handwise in any::<bool>()) {
        let mode = if handwise { ShuffleMode::Handwise } else { ShuffleMode::Random };
        let config = ShuffleConfig::default().with_mode(mode).with_behavior_range(4, 12);
        let mut rng = GameRng::new(seed);
        let shuffler = Shuffler::from_config(&config, &mut rng).unwrap();

        let mut deck = Deck::french32(Catalog::standard()).unwrap();
        let before = sorted(ids(deck.stack()));
        shuffler.shuffle_deck(&mut deck, &mut rng);

        prop_assert_eq!(deck.len(), 32);
        prop_assert_eq!(sorted(ids(deck.stack())), before);
    }
}

// =============================================================================
// Behavior Tests
// =============================================================================

/// Test faked shuffling keeps the deck order.
#[test]
fn test_faked_keeps_order() {
    let mut deck = Deck::french52(Catalog::standard()).unwrap();
    let before = ids(deck.stack());

    let mut shuffler = Shuffler::new();
    shuffler.add(Box::new(Faked)).add(Box::new(Faked));
    shuffler.shuffle_deck(&mut deck, &mut GameRng::new(5));

    assert_eq!(ids(deck.stack()), before);
}

/// Test turning the deck over twice restores it.
#[test]
fn test_upside_down_twice_restores() {
    let mut deck = Deck::french52(Catalog::standard()).unwrap();
    let before = ids(deck.stack());

    let mut shuffler = Shuffler::new();
    shuffler.add(Box::new(UpSideDown));
    let mut rng = GameRng::new(5);

    shuffler.shuffle_deck(&mut deck, &mut rng);
    assert_ne!(ids(deck.stack()), before);
    shuffler.shuffle_deck(&mut deck, &mut rng);
    assert_eq!(ids(deck.stack()), before);
}

/// Test a real shuffle actually moves cards.
#[test]
fn test_random_shuffle_changes_order() {
    let mut rng = GameRng::new(2024);
    let shuffler = Shuffler::random(&ShuffleConfig::default(), &mut rng).unwrap();
    let mut deck = Deck::build(DeckKind::French52, Catalog::standard()).unwrap();
    let before = ids(deck.stack());

    shuffler.shuffle_deck(&mut deck, &mut rng);
    assert_ne!(ids(deck.stack()), before);
}

// =============================================================================
// Factory Tests
// =============================================================================

/// Test explicit counts and the zero-count failure.
#[test]
fn test_explicit_counts() {
    let mut rng = GameRng::new(9);
    let behaviors = build_behaviors(ShuffleMode::Random, 7, 12, &mut rng).unwrap();
    assert_eq!(behaviors.len(), 7);

    let err = build_behaviors(ShuffleMode::Handwise, 0, 12, &mut rng).unwrap_err();
    assert!(matches!(err, CardError::NotPossible(_)));
}

/// Test hand-wise shufflers never draw table or flip behaviors.
#[test]
fn test_handwise_pool() {
    let mut rng = GameRng::new(9);
    for _ in 0..10 {
        let shuffler = Shuffler::handwise(&ShuffleConfig::default(), &mut rng).unwrap();
        assert!(shuffler
            .kinds()
            .all(|k| k != BehaviorKind::TableSpreaded && k != BehaviorKind::UpSideDown));
    }
}

/// Test an unknown selector is rejected.
#[test]
fn test_unknown_selector() {
    assert!(matches!(BehaviorKind::from_selector(99), Err(CardError::NotValid(_))));
}

/// Test a seed reproduces the whole shuffle.
#[test]
fn test_seed_reproduces_shuffle() {
    let run = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let shuffler = Shuffler::random(&ShuffleConfig::default(), &mut rng).unwrap();
        let mut deck = Deck::french52(Catalog::standard()).unwrap();
        shuffler.shuffle_deck(&mut deck, &mut rng);
        ids(deck.stack())
    };

    assert_eq!(run(1), run(1));
    assert_ne!(run(1), run(2));
}
