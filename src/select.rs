use crate::distribution::Distribution;
use crate::error::Result;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Index of the outcome with the highest probability. Ties go to the
/// earliest outcome.
pub fn argmax(dist: &Distribution) -> usize {
    let probs = dist.probs();
    let mut best = 0;
    for (i, p) in probs.iter().enumerate().skip(1) {
        if *p > probs[best] {
            best = i;
        }
    }
    best
}

/// Draws an outcome index proportionally to probability, using a seeded RNG
/// for reproducibility.
pub struct WeightedSampler {
    seed: u64,
}

impl WeightedSampler {
    /// Create a new weighted sampler with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draw one outcome index from the distribution.
    pub fn sample(&self, dist: &Distribution) -> Result<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let index = WeightedIndex::new(dist.probs())?;
        Ok(index.sample(&mut rng))
    }
}
