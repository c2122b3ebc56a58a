//! Playing cards composed of a suit facet and a rank facet.
//!
//! All identity is derived from the facets, outer (suit) to inner (rank):
//!
//! - `value = (sum of raw values) % 100`
//! - `color = (sum of raw values) / 100`
//! - `id    = suit code + rank code` (e.g. `"SA"`)
//! - `xtag  = suit tag + rank tag` (e.g. `"SpadeAce"`)
//!
//! A bare joker has no suit facet, so its color is 0 and its ID is `"0"`.
//!
//! Equality and hashing use the derived `(id, value, color)` triple.
//! Ordering is by value, then color.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::facet::{Facet, Rank, Suit};

/// A playing card.
///
/// Cards are deliberately not `Copy`: a card lives in exactly one
/// container at a time and moves between them.
///
/// ## Example
///
/// ```
/// use rust_cardtable::cards::{Card, Rank, Suit};
///
/// let ace = Card::new(Suit::Spade, Rank::Ace);
/// assert_eq!(ace.id(), "SA");
/// assert_eq!(ace.value(), 50);
/// assert_eq!(ace.color(), 4);
/// assert_eq!(ace.xml(), "<SpadeAce />");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    suit: Option<Suit>,
    rank: Rank,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit: Some(suit),
            rank,
        }
    }

    /// Create the bare joker (no suit facet).
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: None,
            rank: Rank::Joker,
        }
    }

    /// Suit facet, if any.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Rank facet.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Facets outer-to-inner.
    pub fn facets(&self) -> SmallVec<[&dyn Facet; 2]> {
        let mut facets: SmallVec<[&dyn Facet; 2]> = SmallVec::new();
        if let Some(suit) = &self.suit {
            facets.push(suit);
        }
        facets.push(&self.rank);
        facets
    }

    fn raw_sum(&self) -> u32 {
        self.facets().iter().map(|f| f.raw_value()).sum()
    }

    /// Rank strength, 0 (joker) to 50 (ace).
    #[must_use]
    pub fn value(&self) -> u32 {
        self.raw_sum() % 100
    }

    /// Suit color, 4 (spade) to 1 (diamond), 0 without a suit.
    #[must_use]
    pub fn color(&self) -> u32 {
        self.raw_sum() / 100
    }

    /// Short identifier, e.g. `"SA"` or `"0"`.
    #[must_use]
    pub fn id(&self) -> String {
        self.facets().iter().map(|f| f.code()).collect()
    }

    /// Tag name, e.g. `"SpadeAce"`.
    #[must_use]
    pub fn xtag(&self) -> String {
        self.facets().iter().map(|f| f.tag()).collect()
    }

    /// Diagnostic XML element, e.g. `"<SpadeAce />"`.
    #[must_use]
    pub fn xml(&self) -> String {
        format!("<{} />", self.xtag())
    }

    /// Is this a joker (suited or bare)?
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value() && self.color() == other.color() && self.id() == other.id()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
        self.value().hash(state);
        self.color().hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .cmp(&other.value())
            .then_with(|| self.color().cmp(&other.color()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
