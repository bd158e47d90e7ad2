use std::fmt::Debug;

/// Chooses which dataset indices a `DataLoader` visits on each pass, and in what order.
///
/// A pass is drawn whole: the loader asks for it when it is built and again on every
/// `reset`. Stateful samplers (a seeded shuffle) advance between passes.
pub trait Sampler: Debug {
    /// Indices of the next pass over a dataset of `dataset_len` items.
    fn next_pass(&mut self, dataset_len: usize) -> Vec<usize>;

    /// How many indices [`Sampler::next_pass`] returns for `dataset_len` items.
    fn pass_len(&self, dataset_len: usize) -> usize;
}
