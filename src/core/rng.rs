//! Deterministic random number generation for playouts.
//!
//! Random playouts drive self-play fuzzing and simple bots. They must be
//! reproducible: the same seed always yields the same game.
//!
//! ```
//! use spooky_ttt::core::GameRng;
//!
//! let items = [10, 20, 30, 40];
//! let mut rng = GameRng::new(7);
//! let mut again = GameRng::new(7);
//! assert_eq!(rng.choose(&items), again.choose(&items));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a random element from a slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
