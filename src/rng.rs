//! Random draw sources for the shuffler.
//!
//! The shuffle consumes a stream of bounded uniform draws through the
//! `DrawSource` trait rather than a concrete generator, so games can be
//! dealt from a seeded generator, from OS entropy, or from a scripted
//! sequence in tests.
//!
//! ```
//! use klondike_rules::{DrawSource, GameRng};
//!
//! let mut a = GameRng::seeded(42);
//! let mut b = GameRng::seeded(42);
//! assert_eq!(a.next_below(52), b.next_below(52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A stream of bounded uniform random draws.
pub trait DrawSource {
    /// Returns a value uniformly distributed in `0..bound`.
    ///
    /// Callers always pass `bound >= 1`.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// ChaCha8-backed draw source.
///
/// The same seed produces the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a deterministic source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    ///
    /// Two sources created this way almost certainly produce different
    /// sequences.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl DrawSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of draws.
///
/// Used by tests that need full control over the dealt layout.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    values: Vec<usize>,
    next: usize,
}

impl ScriptedDraws {
    /// Create a source that yields `values` in order.
    #[must_use]
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl DrawSource for ScriptedDraws {
    /// # Panics
    ///
    /// Panics if the script is exhausted or the next scripted value is not
    /// below `bound`.
    fn next_below(&mut self, bound: usize) -> usize {
        assert!(
            self.next < self.values.len(),
            "scripted draw source exhausted after {} draws",
            self.values.len(),
        );
        let value = self.values[self.next];
        self.next += 1;
        assert!(
            value < bound,
            "scripted draw {value} is not below bound {bound}",
        );
        value
    }
}
