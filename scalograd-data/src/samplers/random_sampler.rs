use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// How a [`RandomSampler`] draws the indices of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Distinct indices in random order.
    Shuffle,
    /// Independent uniform draws; an index may repeat within a pass.
    WithReplacement,
}

/// Random index order for mini-batch training.
///
/// The sampler owns its generator, so every pass draws a new order while two samplers
/// built from the same seed replay the same sequence of passes.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    draw: Draw,
    /// Indices per pass; `None` means one per dataset item.
    num_samples: Option<usize>,
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a sampler seeded from system entropy.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        Self::from_rng(replacement, num_samples, StdRng::from_entropy())
    }

    /// Creates a sampler whose passes are fully determined by `seed`.
    pub fn with_seed(replacement: bool, num_samples: Option<usize>, seed: u64) -> Self {
        Self::from_rng(replacement, num_samples, StdRng::seed_from_u64(seed))
    }

    fn from_rng(replacement: bool, num_samples: Option<usize>, rng: StdRng) -> Self {
        let draw = if replacement {
            Draw::WithReplacement
        } else {
            Draw::Shuffle
        };
        RandomSampler {
            draw,
            num_samples,
            rng,
        }
    }

    pub fn draw(&self) -> Draw {
        self.draw
    }
}

impl Sampler for RandomSampler {
    fn next_pass(&mut self, dataset_len: usize) -> Vec<usize> {
        let count = self.num_samples.unwrap_or(dataset_len);
        if dataset_len == 0 {
            return Vec::new();
        }
        match self.draw {
            Draw::WithReplacement => (0..count)
                .map(|_| self.rng.gen_range(0..dataset_len))
                .collect(),
            Draw::Shuffle if count > dataset_len => {
                warn!(
                    "RandomSampler: {} distinct indices requested from {} items; pass is empty",
                    count, dataset_len
                );
                Vec::new()
            }
            Draw::Shuffle => index::sample(&mut self.rng, dataset_len, count).into_vec(),
        }
    }

    fn pass_len(&self, dataset_len: usize) -> usize {
        let count = self.num_samples.unwrap_or(dataset_len);
        match self.draw {
            _ if dataset_len == 0 => 0,
            Draw::Shuffle if count > dataset_len => 0,
            _ => count,
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
