use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

/// A source of uniform random choices for the dataset generator.
pub trait RandomGenerator: Default {
    /// Returns a uniformly distributed integer in `[from, to)`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks a uniformly random element, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Draws from the thread-local generator. Not reproducible.
#[derive(Default)]
pub struct StandardRandomGenerator {
    rng: ThreadRng,
}

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

/// A seeded generator: the same seed always yields the same dataset.
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
