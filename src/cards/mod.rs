//! Card system: facets, cards, and the archetype catalog.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: The two facets a playable card is composed of
//! - `Facet`: Raw value, code and tag contributed by one layer
//! - `Card`: Derived value, color, ID and tag over its facets
//! - `Catalog`: One archetype per (suit, rank), hands out clones
//!
//! ## Archetypes
//!
//! Archetypes are built once and never mutated. Containers only ever
//! hold clones, so two cards built from the same ID never alias.

pub mod card;
pub mod catalog;
pub mod facet;

pub use card::Card;
pub use catalog::Catalog;
pub use facet::{Facet, Rank, Suit};
