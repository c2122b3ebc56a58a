//! Shuffler: an ordered list of behaviors applied in sequence.

use super::behavior::Behavior;
use super::factory::{build_from_config, BehaviorKind};
use crate::core::config::{ShuffleConfig, ShuffleMode};
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::stack::{Deck, Stack};

/// Applies its behaviors to a stack strictly in insertion order.
///
/// ## Example
///
/// ```
/// use rust_cardtable::cards::Catalog;
/// use rust_cardtable::core::GameRng;
/// use rust_cardtable::shuffle::{Faked, Shuffler, UpSideDown};
/// use rust_cardtable::stack::Deck;
///
/// let mut deck = Deck::french32(Catalog::standard()).unwrap();
/// let mut rng = GameRng::new(42);
///
/// let mut shuffler = Shuffler::new();
/// shuffler.add(Box::new(UpSideDown)).add(Box::new(Faked));
///
/// shuffler.shuffle_deck(&mut deck, &mut rng).shuffle_deck(&mut deck, &mut rng);
/// assert_eq!(deck.stack().top().unwrap().id(), "D7");
/// ```
#[derive(Debug, Default)]
pub struct Shuffler {
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Shuffler {
    /// Create an empty shuffler (shuffling with it changes nothing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a prepared behavior list.
    #[must_use]
    pub fn with_behaviors(behaviors: Vec<Box<dyn Behavior>>) -> Self {
        Self { behaviors }
    }

    /// Build a randomly composed shuffler from `config`.
    pub fn from_config(config: &ShuffleConfig, rng: &mut GameRng) -> Result<Self> {
        Ok(Self::with_behaviors(build_from_config(config, rng)?))
    }

    /// Random shuffler drawing from all six behaviors.
    pub fn random(config: &ShuffleConfig, rng: &mut GameRng) -> Result<Self> {
        Self::from_config(&config.clone().with_mode(ShuffleMode::Random), rng)
    }

    /// Random shuffler drawing only from hand-wise behaviors.
    pub fn handwise(config: &ShuffleConfig, rng: &mut GameRng) -> Result<Self> {
        Self::from_config(&config.clone().with_mode(ShuffleMode::Handwise), rng)
    }

    /// Append a behavior.
    pub fn add(&mut self, behavior: Box<dyn Behavior>) -> &mut Self {
        self.behaviors.push(behavior);
        self
    }

    /// Number of behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Check if there are no behaviors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Kinds of the behaviors, in application order.
    pub fn kinds(&self) -> impl Iterator<Item = BehaviorKind> + '_ {
        self.behaviors.iter().map(|b| b.kind())
    }

    /// Apply every behavior to `stack` in order.
    pub fn shuffle(&self, stack: &mut Stack, rng: &mut GameRng) -> &Self {
        tracing::debug!(
            behaviors = self.behaviors.len(),
            cards = stack.len(),
            "shuffling stack"
        );
        for behavior in &self.behaviors {
            tracing::trace!(kind = ?behavior.kind(), "behavior pass");
            behavior.shuffle(stack, rng);
        }
        self
    }

    /// Apply every behavior to the deck's stack in order.
    pub fn shuffle_deck(&self, deck: &mut Deck, rng: &mut GameRng) -> &Self {
        self.shuffle(deck.stack_mut(), rng)
    }
}
