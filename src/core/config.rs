//! Engine configuration types.
//!
//! Tables are configured at startup by providing:
//! - `ShuffleConfig`: How dealers shuffle (behavior counts, repetitions, passes)
//! - `EngineConfig`: Deck kind, player count, seed and shuffle settings
//!
//! Both are plain serde structs with builder methods; call `validate()`
//! before handing them to a table.

use serde::{Deserialize, Serialize};

use super::error::{CardError, Result};
use super::rng::GameRng;
use crate::stack::DeckKind;

/// Which behaviors a randomly built shuffler may draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Any of the six behaviors.
    Random,
    /// Only behaviors a human does by hand: faked, hand-wise, stacked, half-stacked.
    Handwise,
}

/// Shuffling parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Passes each behavior performs per application (default: 12).
    pub repetitions: usize,

    /// Lower bound (inclusive) of the random behavior count.
    pub min_behaviors: usize,

    /// Upper bound (exclusive) of the random behavior count.
    pub max_behaviors: usize,

    /// Behavior pool used by randomly built shufflers.
    pub mode: ShuffleMode,

    /// How often a dealer runs its shuffler per shuffle phase.
    pub passes: usize,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            repetitions: 12,
            min_behaviors: 32,
            max_behaviors: 144,
            mode: ShuffleMode::Handwise,
            passes: 3,
        }
    }
}

impl ShuffleConfig {
    /// Set the per-behavior repetition count.
    #[must_use]
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the random behavior count range `[min, max)`.
    #[must_use]
    pub fn with_behavior_range(mut self, min: usize, max: usize) -> Self {
        self.min_behaviors = min;
        self.max_behaviors = max;
        self
    }

    /// Set the behavior pool.
    #[must_use]
    pub fn with_mode(mut self, mode: ShuffleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of shuffler passes per shuffle phase.
    #[must_use]
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(CardError::not_valid(
                "ShuffleConfig.validate - repetitions must be at least 1",
            ));
        }
        if self.min_behaviors == 0 || self.max_behaviors <= self.min_behaviors {
            return Err(CardError::not_valid(format!(
                "ShuffleConfig.validate - behavior range [{}, {}) is empty",
                self.min_behaviors, self.max_behaviors
            )));
        }
        if self.passes == 0 {
            return Err(CardError::not_valid(
                "ShuffleConfig.validate - passes must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the table's random source. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Deck the dealer plays with.
    pub deck: DeckKind,

    /// Number of seated players.
    pub players: usize,

    /// Shuffling parameters.
    pub shuffle: ShuffleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            deck: DeckKind::French52,
            players: 2,
            shuffle: ShuffleConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Smallest supported table.
    pub const MIN_PLAYERS: usize = 2;
    /// Largest supported table.
    pub const MAX_PLAYERS: usize = 10;

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose the deck.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    /// Set the player count.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Replace the shuffle settings.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleConfig) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Random source for a table: seeded if `seed` is set, from entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&self.players) {
            return Err(CardError::not_valid(format!(
                "EngineConfig.validate - player count {} outside {}..={}",
                self.players,
                Self::MIN_PLAYERS,
                Self::MAX_PLAYERS
            )));
        }
        self.shuffle.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.deck, DeckKind::French52);
        assert_eq!(config.players, 2);
        assert_eq!(config.shuffle.repetitions, 12);
        assert_eq!(config.shuffle.min_behaviors, 32);
        assert_eq!(config.shuffle.max_behaviors, 144);
        assert_eq!(config.shuffle.mode, ShuffleMode::Handwise);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_deck(DeckKind::French32)
            .with_players(4)
            .with_shuffle(ShuffleConfig::default().with_passes(1).with_mode(ShuffleMode::Random));

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.deck, DeckKind::French32);
        assert_eq!(config.players, 4);
        assert_eq!(config.shuffle.passes, 1);
        assert_eq!(config.shuffle.mode, ShuffleMode::Random);
    }

    #[test]
    fn test_rejects_bad_player_count() {
        let err = EngineConfig::default().with_players(1).validate().unwrap_err();
        assert!(matches!(err, CardError::NotValid(_)));

        let err = EngineConfig::default().with_players(11).validate().unwrap_err();
        assert!(matches!(err, CardError::NotValid(_)));
    }

    #[test]
    fn test_rejects_bad_shuffle_config() {
        assert!(ShuffleConfig::default().with_repetitions(0).validate().is_err());
        assert!(ShuffleConfig::default().with_behavior_range(10, 10).validate().is_err());
        assert!(ShuffleConfig::default().with_behavior_range(0, 4).validate().is_err());
        assert!(ShuffleConfig::default().with_passes(0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_seeded_rng() {
        let config = EngineConfig::default().with_seed(99);
        assert_eq!(config.rng().seed(), 99);
        assert_eq!(config.rng().below(1000), config.rng().below(1000));
    }
}
