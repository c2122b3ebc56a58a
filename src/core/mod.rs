//! Core engine types: RNG, errors, configuration.
//!
//! Everything here is game-agnostic. Randomized operations take an explicit
//! `&mut GameRng` so a seed fully determines every shuffle.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, ShuffleConfig, ShuffleMode};
pub use error::{CardError, Result};
pub use rng::{GameRng, GameRngState};
