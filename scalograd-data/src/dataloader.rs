// dataloader.rs
//! # DataLoader
//!
//! Groups dataset items into batches, in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use scalograd_data::dataloader::DataLoader;
//! use scalograd_data::datasets::VecDataset;
//! use scalograd_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6], vec![0; 6]).unwrap();
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false, None).unwrap();
//! for batch in loader {
//!     let batch = batch.unwrap();
//!     assert_eq!(batch.len(), 2);
//! }
//! ```
//!
//! A loader yields one pass over the dataset; [`DataLoader::reset`] asks the sampler for
//! the indices of the next pass.

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use log::debug;
use scalograd_core::ScalogradError;

/// Custom collation: turns the items of one batch into the batch handed to the caller.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, ScalogradError>,
>;

/// Batching iterator over a dataset.
///
/// # Type Parameters
/// - `D`: the dataset, implementing [`Dataset`].
/// - `S`: the sampler, implementing [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    /// If true, a trailing incomplete batch is skipped.
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices: std::vec::IntoIter<usize>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new loader positioned at the start of a pass.
    ///
    /// # Errors
    /// `ConfigurationError` if `batch_size` is zero.
    pub fn new(
        dataset: D,
        batch_size: usize,
        mut sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Result<Self, ScalogradError> {
        if batch_size == 0 {
            return Err(ScalogradError::ConfigurationError(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        let indices = sampler.next_pass(dataset.len()).into_iter();
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices,
        })
    }

    /// One batch holding the whole dataset, in sampler order.
    pub fn full_batch(dataset: D, sampler: S) -> Result<Self, ScalogradError> {
        let batch_size = dataset.len().max(1);
        Self::new(dataset, batch_size, sampler, false, None)
    }

    /// Starts a new pass with fresh indices from the sampler.
    pub fn reset(&mut self) {
        self.indices = self.sampler.next_pass(self.dataset.len()).into_iter();
        debug!(
            "DataLoader reset: {} index(es), batch size {}",
            self.indices.len(),
            self.batch_size
        );
    }

    /// Number of batches one full pass yields.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.pass_len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, ScalogradError>;

    /// Returns the next batch: `Some(Err(_))` if an item cannot be fetched, `None` once
    /// the pass is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match self.collate_fn {
            Some(ref collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
