//! # rust-cardtable
//!
//! A card table engine: French cards, bounded stacks and decks, a
//! human-style shuffle engine and a rules graph that drives a game's phases.
//!
//! ## Design Principles
//!
//! 1. **Explicit Randomness**: Every randomized call takes a `&mut GameRng`.
//!    There is no global generator; a seed reproduces a whole session.
//!
//! 2. **Clones, Never Archetypes**: The `Catalog` holds one archetype per
//!    card and hands out owned clones, so no two containers share a card.
//!
//! 3. **Fail Fast**: Every fallible operation returns `Result<_, CardError>`
//!    and leaves its receiver unchanged on error.
//!
//! ## Modules
//!
//! - `core`: RNG, error taxonomy, configuration
//! - `cards`: Suits, ranks, cards and the catalog
//! - `stack`: Bounded stacks and canonical decks
//! - `shuffle`: Shuffle behaviors and the shuffler
//! - `rules`: Rules graph, state machine, poker cycle
//! - `games`: Table orchestration (Texas hold'em)
//!
//! ## Example
//!
//! ```
//! use rust_cardtable::{Catalog, Deck, GameRng, ShuffleConfig, Shuffler, StateMachine};
//!
//! let mut rng = GameRng::new(7);
//! let mut deck = Deck::french52(Catalog::standard()).unwrap();
//! let shuffler = Shuffler::handwise(&ShuffleConfig::default(), &mut rng).unwrap();
//! shuffler.shuffle_deck(&mut deck, &mut rng);
//! assert_eq!(deck.len(), 52);
//!
//! let mut rules = StateMachine::poker();
//! assert_eq!(rules.next(None).unwrap().name(), "Shuffling");
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod shuffle;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{
    CardError, EngineConfig, GameRng, GameRngState, Result, ShuffleConfig, ShuffleMode,
};

pub use crate::cards::{Card, Catalog, Facet, Rank, Suit};

pub use crate::stack::{Deck, DeckKind, Stack};

pub use crate::shuffle::{Behavior, BehaviorKind, Shuffler};

pub use crate::rules::{GraphBuilder, RulesGraph, State, StateId, StateMachine};

pub use crate::games::holdem::{Dealer, Player, Table};
