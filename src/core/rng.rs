//! Deterministic random number generation.
//!
//! The engine's only random operation is the opening shuffle. Wrapping
//! the generator keeps it seedable, so a game can be replayed exactly
//! from its seed in tests and debugging sessions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for deck shuffling.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The same seed always produces the same shuffle sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (unbiased Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
