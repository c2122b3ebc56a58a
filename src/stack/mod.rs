//! Card containers.
//!
//! - `Stack`: Bounded ordered pile with push/pop/insert/remove/sort
//! - `Deck`: A stack fixed at a canonical capacity (32 or 52)
//!
//! Containers own their cards outright; moving a card between two
//! stacks is a `pop` followed by a `push`.

mod deck;
mod pile;

pub use deck::{Deck, DeckKind};
pub use pile::Stack;
