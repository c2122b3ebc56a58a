//! The dealer: owns the deck and the shuffler.

use crate::cards::{Card, Catalog};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::rules::StateMachine;
use crate::shuffle::Shuffler;
use crate::stack::{Deck, Stack};

/// Shuffles, deals and collects cards.
#[derive(Debug)]
pub struct Dealer {
    deck: Deck,
    shuffler: Shuffler,
    passes: usize,
    machine: StateMachine,
}

impl Dealer {
    /// Create from parts.
    #[must_use]
    pub fn new(deck: Deck, shuffler: Shuffler, passes: usize) -> Self {
        Self {
            deck,
            shuffler,
            passes,
            machine: StateMachine::poker(),
        }
    }

    /// Build a full deck and a random shuffler as configured.
    pub fn from_config(config: &EngineConfig, catalog: &Catalog, rng: &mut GameRng) -> Result<Self> {
        let deck = Deck::build(config.deck, catalog)?;
        let shuffler = Shuffler::from_config(&config.shuffle, rng)?;
        Ok(Self::new(deck, shuffler, config.shuffle.passes))
    }

    /// The deck still in the dealer's hands.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The behaviors applied on each shuffle pass.
    #[must_use]
    pub fn shuffler(&self) -> &Shuffler {
        &self.shuffler
    }

    /// The dealer's state machine.
    #[must_use]
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Mutable access to the dealer's state machine.
    pub fn machine_mut(&mut self) -> &mut StateMachine {
        &mut self.machine
    }

    /// Run the shuffler over the deck `passes` times.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for _ in 0..self.passes {
            self.shuffler.shuffle_deck(&mut self.deck, rng);
        }
    }

    /// Hand out the top card.
    pub fn deal(&mut self) -> Result<Card> {
        self.deck.pop()
    }

    /// Put one card back on the deck.
    pub fn collect(&mut self, card: Card) -> Result<()> {
        self.deck.push(card)
    }

    /// Put a whole pile back on the deck, emptying it. Empty piles are skipped.
    pub fn collect_stack(&mut self, stack: &mut Stack) -> Result<()> {
        if stack.is_empty() {
            return Ok(());
        }
        self.deck.stack_mut().push_stack(stack)
    }
}
