//! Texas hold'em table orchestration.
//!
//! Moves cards between a dealer's deck, the players' hands, the burn pile
//! and the board as the poker rules graph advances. Betting, chips and
//! hand evaluation are left to the application.

mod dealer;
mod player;
mod table;

pub use dealer::Dealer;
pub use player::{Player, HAND_SIZE};
pub use table::{Table, BOARD_SIZE, BURN_SIZE};
