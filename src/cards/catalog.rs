//! Card catalog: one archetype per distinct (suit, rank) pair.
//!
//! Playable cards are never the archetypes themselves; every lookup
//! hands out a fresh clone. The ID and tag indexes are built once when
//! the catalog is constructed and never change afterwards.
//!
//! The standard French catalog is available process-wide through
//! [`Catalog::standard`], initialized on first use behind a `OnceLock`.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::card::Card;
use super::facet::{Rank, Suit};
use crate::core::error::{CardError, Result};

/// Archetype table with case-insensitive ID and tag indexes.
///
/// ## Example
///
/// ```
/// use rust_cardtable::cards::Catalog;
///
/// let catalog = Catalog::standard();
///
/// let ace = catalog.build("sa").unwrap();
/// assert_eq!(ace.id(), "SA");
/// assert_eq!(ace.value(), 50);
///
/// let same = catalog.build_xtag("SpadeAce").unwrap();
/// assert_eq!(ace, same);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    archetypes: Vec<Card>,
    by_id: FxHashMap<String, usize>,
    by_xtag: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from an archetype table.
    ///
    /// Fails with `NotValid` if two archetypes share an ID or a tag
    /// (compared case-insensitively), so every lookup has at most one match.
    pub fn from_archetypes(archetypes: Vec<Card>) -> Result<Self> {
        let mut by_id = FxHashMap::default();
        let mut by_xtag = FxHashMap::default();

        for (index, card) in archetypes.iter().enumerate() {
            let id = card.id().to_ascii_uppercase();
            if let Some(prev) = by_id.insert(id.clone(), index) {
                return Err(CardError::not_valid(format!(
                    "Catalog.from_archetypes - id {} used by archetypes {} and {}",
                    id, prev, index
                )));
            }

            let xtag = card.xtag().to_ascii_lowercase();
            if let Some(prev) = by_xtag.insert(xtag, index) {
                return Err(CardError::not_valid(format!(
                    "Catalog.from_archetypes - tag {} used by archetypes {} and {}",
                    card.xtag(),
                    prev,
                    index
                )));
            }
        }

        tracing::debug!(archetypes = archetypes.len(), "catalog indexed");

        Ok(Self {
            archetypes,
            by_id,
            by_xtag,
        })
    }

    /// The French catalog: 52 regular cards, a joker per suit and the bare joker.
    #[must_use]
    pub fn french() -> Self {
        Self::from_archetypes(french_archetypes())
            .unwrap_or_else(|e| panic!("built-in French archetype table is ambiguous: {e}"))
    }

    /// Shared French catalog, built once per process.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(Catalog::french)
    }

    /// Clone the archetype whose ID matches `id` (case-insensitive).
    pub fn build(&self, id: &str) -> Result<Card> {
        self.by_id
            .get(&id.to_ascii_uppercase())
            .map(|&index| self.archetypes[index].clone())
            .ok_or_else(|| CardError::not_found(format!("Catalog.build - no card with id {:?}", id)))
    }

    /// Clone the archetype whose tag matches `xtag` (case-insensitive).
    pub fn build_xtag(&self, xtag: &str) -> Result<Card> {
        self.by_xtag
            .get(&xtag.to_ascii_lowercase())
            .map(|&index| self.archetypes[index].clone())
            .ok_or_else(|| {
                CardError::not_possible(format!(
                    "Catalog.build_xtag - building a card for tag {:?}",
                    xtag
                ))
            })
    }

    /// Build several cards at once, failing on the first unknown ID.
    pub fn build_all<'a, I>(&self, ids: I) -> Result<Vec<Card>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().map(|id| self.build(id)).collect()
    }

    /// Check whether an ID is known.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(&id.to_ascii_uppercase())
    }

    /// Number of archetypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Iterate over the archetypes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.archetypes.iter()
    }
}

fn french_archetypes() -> Vec<Card> {
    let mut cards = Vec::with_capacity(Suit::ALL.len() * 14 + 1);
    for suit in Suit::ALL {
        for rank in Rank::REGULAR {
            cards.push(Card::new(suit, rank));
        }
        cards.push(Card::new(suit, Rank::Joker));
    }
    cards.push(Card::joker());
    cards
}
