//! Random selection - the seam between the router and its source of chance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws uniformly distributed indices.
pub trait RandomSource {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG, reseeded by the OS. Not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Pick one item uniformly. Returns `None` only for an empty slice.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    // Out-of-range draws wrap.
    items.get(rng.pick_index(items.len()) % items.len())
}
