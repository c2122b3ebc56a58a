//! Decks: stacks with a canonical capacity, filled from the catalog.

use serde::{Deserialize, Serialize};

use super::pile::Stack;
use crate::cards::{Card, Catalog, Facet, Rank, Suit};
use crate::core::error::{CardError, Result};

/// Canonical deck sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// Piquet deck: seven through ace in every suit.
    French32,
    /// Full French deck: two through ace in every suit.
    French52,
}

impl DeckKind {
    /// Number of cards in the deck.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            DeckKind::French32 => 32,
            DeckKind::French52 => 52,
        }
    }

    /// Ranks included, highest first.
    #[must_use]
    pub fn ranks(self) -> &'static [Rank] {
        match self {
            DeckKind::French32 => &Rank::PIQUET,
            DeckKind::French52 => &Rank::REGULAR,
        }
    }
}

/// A stack fixed at a canonical capacity.
#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    stack: Stack,
}

impl Deck {
    /// Create an empty deck of the given kind.
    pub fn new(kind: DeckKind) -> Result<Self> {
        Ok(Self {
            kind,
            stack: Stack::new(kind.capacity())?,
        })
    }

    /// Build a full deck of the given kind.
    ///
    /// Cards are pushed suit by suit (spade, cross, heart, diamond), ranks
    /// highest first, so the diamond two (or seven) ends up on top.
    pub fn build(kind: DeckKind, catalog: &Catalog) -> Result<Self> {
        let mut deck = Self::new(kind)?;
        for suit in Suit::ALL {
            for rank in kind.ranks() {
                let id = format!("{}{}", suit.code(), rank.code());
                deck.stack.push(catalog.build(&id)?)?;
            }
        }
        if deck.stack.len() != kind.capacity() {
            return Err(CardError::not_valid(format!(
                "Deck.build - built {} cards for a {} card deck",
                deck.stack.len(),
                kind.capacity()
            )));
        }
        Ok(deck)
    }

    /// Build the 32-card piquet deck.
    pub fn french32(catalog: &Catalog) -> Result<Self> {
        Self::build(DeckKind::French32, catalog)
    }

    /// Build the 52-card deck.
    pub fn french52(catalog: &Catalog) -> Result<Self> {
        Self::build(DeckKind::French52, catalog)
    }

    /// Deck kind.
    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Number of cards currently in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The underlying stack.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The underlying stack, mutably.
    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// Take the top card.
    pub fn pop(&mut self) -> Result<Card> {
        self.stack.pop()
    }

    /// Put a card back on top.
    pub fn push(&mut self, card: Card) -> Result<()> {
        self.stack.push(card)
    }
}
