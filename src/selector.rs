//! Uniform random selection

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Draw one element uniformly, or `None` for an empty slice
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.random_range(0..items.len());
    items.get(index)
}

/// Random source used by the store for picks
///
/// Seeded construction gives reproducible picks in tests.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: Pcg32,
}

impl RandomSelector {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        pick(&mut self.rng, items)
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
