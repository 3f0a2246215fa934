//! Deterministic random number generation for scrambles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical scrambles
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use cube_engine::scramble::ScrambleRng;
//!
//! let mut a = ScrambleRng::new(7);
//! let mut b = ScrambleRng::new(7);
//! assert_eq!(a.gen_range(0..18), b.gen_range(0..18));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct ScrambleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ScrambleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ScrambleRngState {
        ScrambleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ScrambleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
