use super::traits::Sampler;

/// Visits `0..dataset_len` in order, identically on every pass.
///
/// Full-batch training uses it so the batch lines up sample for sample with the targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn next_pass(&mut self, dataset_len: usize) -> Vec<usize> {
        (0..dataset_len).collect()
    }

    fn pass_len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
