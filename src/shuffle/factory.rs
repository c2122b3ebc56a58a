//! Random construction of behavior lists.

use serde::{Deserialize, Serialize};

use super::behavior::{Behavior, Faked, HalfStacked, HandWise, Stacked, TableSpreaded, UpSideDown};
use crate::core::config::{ShuffleConfig, ShuffleMode};
use crate::core::error::{CardError, Result};
use crate::core::rng::GameRng;

/// The available shuffle behaviors, in selector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    Faked,
    HandWise,
    Stacked,
    HalfStacked,
    TableSpreaded,
    UpSideDown,
}

impl BehaviorKind {
    /// Every kind, indexed by selector.
    pub const ALL: [BehaviorKind; 6] = [
        BehaviorKind::Faked,
        BehaviorKind::HandWise,
        BehaviorKind::Stacked,
        BehaviorKind::HalfStacked,
        BehaviorKind::TableSpreaded,
        BehaviorKind::UpSideDown,
    ];

    /// Selectors below this bound are hand-wise kinds.
    pub const HANDWISE_SELECTORS: usize = 4;

    /// Map a selector to its kind.
    ///
    /// Fails with `NotValid` for selectors outside `0..6`.
    pub fn from_selector(selector: usize) -> Result<BehaviorKind> {
        Self::ALL.get(selector).copied().ok_or_else(|| {
            CardError::not_valid(format!("BehaviorKind.from_selector - kind {}", selector))
        })
    }

    /// Instantiate the behavior with the given repetition count.
    #[must_use]
    pub fn build(self, repetitions: usize) -> Box<dyn Behavior> {
        match self {
            BehaviorKind::Faked => Box::new(Faked),
            BehaviorKind::HandWise => Box::new(HandWise::new(repetitions)),
            BehaviorKind::Stacked => Box::new(Stacked::new(repetitions)),
            BehaviorKind::HalfStacked => Box::new(HalfStacked::new(repetitions)),
            BehaviorKind::TableSpreaded => Box::new(TableSpreaded::new(repetitions)),
            BehaviorKind::UpSideDown => Box::new(UpSideDown),
        }
    }

    /// Is this kind available in hand-wise mode?
    #[must_use]
    pub fn is_handwise(self) -> bool {
        matches!(
            self,
            BehaviorKind::Faked | BehaviorKind::HandWise | BehaviorKind::Stacked | BehaviorKind::HalfStacked
        )
    }
}

/// Build `count` behaviors drawn uniformly from the pool of `mode`.
///
/// Fails with `NotPossible` if `count` is zero.
pub fn build_behaviors(
    mode: ShuffleMode,
    count: usize,
    repetitions: usize,
    rng: &mut GameRng,
) -> Result<Vec<Box<dyn Behavior>>> {
    if count == 0 {
        return Err(CardError::not_possible(
            "shuffle::build_behaviors - number of behaviors must be at least 1",
        ));
    }

    let pool = match mode {
        ShuffleMode::Random => BehaviorKind::ALL.len(),
        ShuffleMode::Handwise => BehaviorKind::HANDWISE_SELECTORS,
    };

    (0..count)
        .map(|_| BehaviorKind::from_selector(rng.below(pool)).map(|kind| kind.build(repetitions)))
        .collect()
}

/// Build a randomly sized behavior list as described by `config`.
///
/// The count is drawn uniformly from `[min_behaviors, max_behaviors)`.
pub fn build_from_config(config: &ShuffleConfig, rng: &mut GameRng) -> Result<Vec<Box<dyn Behavior>>> {
    let count = rng.between(config.min_behaviors, config.max_behaviors);
    build_behaviors(config.mode, count, config.repetitions, rng)
}
