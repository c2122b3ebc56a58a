//! The table: drives dealer and players through the poker cycle.

use super::dealer::Dealer;
use super::player::{Player, HAND_SIZE};
use crate::cards::Catalog;
use crate::core::config::EngineConfig;
use crate::core::error::{CardError, Result};
use crate::core::rng::GameRng;
use crate::rules::poker::tags;
use crate::rules::{StateMachine, HAND_CYCLE};
use crate::stack::Stack;

/// Cards burned per hand (one before flop, river and turn).
pub const BURN_SIZE: usize = 3;
/// Community cards per hand.
pub const BOARD_SIZE: usize = 5;

/// A dealer, seated players, the burn pile and the board.
///
/// Every call to `advance` moves the table and all participants one step
/// along the poker cycle and performs the card movement of the phase just
/// entered.
#[derive(Debug)]
pub struct Table {
    dealer: Dealer,
    players: Vec<Player>,
    burned: Stack,
    board: Stack,
    machine: StateMachine,
    hands_played: usize,
}

impl Table {
    /// Seat `config.players` players around a fresh deck.
    ///
    /// Fails with `NotValid` if the configuration does not validate.
    pub fn new(config: &EngineConfig, catalog: &Catalog, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let dealer = Dealer::from_config(config, catalog, rng)?;
        let players = (0..config.players).map(Player::new).collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            players = players.len(),
            deck = dealer.deck().len(),
            behaviors = dealer.shuffler().len(),
            "table ready"
        );

        Ok(Self {
            dealer,
            players,
            burned: Stack::new(BURN_SIZE)?,
            board: Stack::new(BOARD_SIZE)?,
            machine: StateMachine::poker(),
            hands_played: 0,
        })
    }

    /// The dealer and the deck.
    #[must_use]
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player in `seat`.
    pub fn player(&self, seat: usize) -> Result<&Player> {
        self.players.get(seat).ok_or_else(|| {
            CardError::not_valid(format!(
                "Table.player - seat {} out of range for {} players",
                seat,
                self.players.len()
            ))
        })
    }

    /// Community cards dealt so far.
    #[must_use]
    pub fn board(&self) -> &Stack {
        &self.board
    }

    /// Cards burned so far this hand.
    #[must_use]
    pub fn burned(&self) -> &Stack {
        &self.burned
    }

    /// The table's state machine.
    #[must_use]
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Name of the current phase.
    #[must_use]
    pub fn phase(&self) -> &str {
        self.machine.current_name()
    }

    /// Completed hands.
    #[must_use]
    pub fn hands_played(&self) -> usize {
        self.hands_played
    }

    /// Every card on the table: deck, hands, burn pile and board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.dealer.deck().len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.burned.len()
            + self.board.len()
    }

    /// Step into the next phase and return its name.
    pub fn advance(&mut self, rng: &mut GameRng) -> Result<&str> {
        let target = self.machine.current().next(None)?;
        let phase = self.machine.graph().state(target)?.name().to_string();

        tracing::debug!(from = self.phase(), to = %phase, "table phase");

        let needed = self.cards_needed(&phase);
        if needed > self.dealer.deck().len() {
            return Err(CardError::not_possible(format!(
                "Table.advance - {} needs {} cards but the deck holds {}",
                phase,
                needed,
                self.dealer.deck().len()
            )));
        }

        match phase.as_str() {
            tags::SHUFFLING => self.dealer.shuffle(rng),
            tags::DEALING => self.deal_hands()?,
            tags::FLOP => self.burn_and_place(3)?,
            tags::RIVER | tags::TURN => self.burn_and_place(1)?,
            tags::RETURNING => self.return_cards()?,
            _ => {}
        }

        self.machine.next(Some(&phase))?;
        self.dealer.machine_mut().next(Some(&phase))?;
        for player in &mut self.players {
            player.machine_mut().next(Some(&phase))?;
        }
        if phase == tags::RETURNING {
            self.hands_played += 1;
        }

        Ok(self.phase())
    }

    /// Play one hand from `Idling` back to `Idling`.
    ///
    /// Fails with `NotPossible` if the table is mid-hand.
    pub fn play_hand(&mut self, rng: &mut GameRng) -> Result<()> {
        if self.phase() != tags::IDLING {
            return Err(CardError::not_possible(format!(
                "Table.play_hand - table is in phase {}",
                self.phase()
            )));
        }
        for _ in HAND_CYCLE {
            self.advance(rng)?;
        }
        Ok(())
    }

    /// Cards the dealer hands out when entering `phase`.
    fn cards_needed(&self, phase: &str) -> usize {
        match phase {
            tags::DEALING => HAND_SIZE * self.players.len(),
            tags::FLOP => 4,
            tags::RIVER | tags::TURN => 2,
            _ => 0,
        }
    }

    fn deal_hands(&mut self) -> Result<()> {
        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                player.take(self.dealer.deal()?)?;
            }
        }
        Ok(())
    }

    fn burn_and_place(&mut self, count: usize) -> Result<()> {
        self.burned.push(self.dealer.deal()?)?;
        for _ in 0..count {
            self.board.push(self.dealer.deal()?)?;
        }
        Ok(())
    }

    fn return_cards(&mut self) -> Result<()> {
        for player in &mut self.players {
            self.dealer.collect_stack(player.hand_mut())?;
        }
        self.dealer.collect_stack(&mut self.burned)?;
        self.dealer.collect_stack(&mut self.board)?;

        let deck = self.dealer.deck();
        if deck.len() != deck.kind().capacity() {
            return Err(CardError::Internal(format!(
                "Table.return_cards - deck holds {} of {} cards",
                deck.len(),
                deck.kind().capacity()
            )));
        }
        Ok(())
    }
}
