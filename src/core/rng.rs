//! Seeded random source for shuffling and behavior selection.
//!
//! Every randomized operation in the crate takes a `&mut GameRng`
//! instead of reaching for a global generator, so a table seeded with
//! the same value replays the same shuffles.
//!
//! ```
//! use rust_cardtable::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.between(3, 13), b.between(3, 13));
//!
//! // A fork is its own stream, still reproducible from the parent seed.
//! let mut fork = a.fork();
//! let _ = fork.below(52);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic random source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Create a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Create a generator from a fresh OS-provided seed.
    ///
    /// The drawn seed is kept so a run can be replayed with `new(seed())`.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        tracing::debug!(seed, "seeded game rng from entropy");
        Self::new(seed)
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform draw in `[0, n)`. Returns 0 when `n == 0`.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.inner.gen_range(0..n)
    }

    /// Uniform draw in `[lo, hi)`. Returns `lo` when the range is empty.
    pub fn between(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.inner.gen_range(lo..hi)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Serializable snapshot of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed of the stream.
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    /// Number of forks taken so far.
    pub forks: u64,
}
