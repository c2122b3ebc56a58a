//! A seated player holding two hole cards.

use crate::cards::Card;
use crate::core::error::Result;
use crate::rules::StateMachine;
use crate::stack::Stack;

/// Hole cards per player.
pub const HAND_SIZE: usize = 2;

/// A seat at the table with its hole cards and its own view of the hand cycle.
#[derive(Clone, Debug)]
pub struct Player {
    seat: usize,
    hand: Stack,
    machine: StateMachine,
}

impl Player {
    /// Seat a player with an empty hand.
    pub fn new(seat: usize) -> Result<Self> {
        Ok(Self {
            seat,
            hand: Stack::new(HAND_SIZE)?,
            machine: StateMachine::poker(),
        })
    }

    /// Seat index, counted from zero.
    #[must_use]
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// Hole cards held.
    #[must_use]
    pub fn hand(&self) -> &Stack {
        &self.hand
    }

    /// The player's state machine.
    #[must_use]
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Mutable access to the player's state machine.
    pub fn machine_mut(&mut self) -> &mut StateMachine {
        &mut self.machine
    }

    /// Receive a card. Fails with `NotPossible` once the hand is full.
    pub fn take(&mut self, card: Card) -> Result<()> {
        self.hand.push(card)
    }

    /// Hand every card back, leaving the hand empty.
    pub fn give_back(&mut self) -> Vec<Card> {
        self.hand.take_all()
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Stack {
        &mut self.hand
    }
}
