//! Deterministic random number generation for draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical readings
//! - **Injectable**: The draw engine never reaches for a global RNG
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use tarot_spread::core::DrawRng;
//!
//! let mut rng1 = DrawRng::new(42);
//! let mut rng2 = DrawRng::new(42);
//!
//! assert_eq!(rng1.gen_index(78), rng2.gen_index(78));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG used for card identity and orientation.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is kept so the reading can still be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Uniform usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DrawRngState {
        DrawRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DrawRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for reproducing a reading.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
