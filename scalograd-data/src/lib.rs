//! # scalograd-data
//!
//! Dataset access, index sampling and batching for the scalograd training loop.
//!
//! A [`DataLoader`] pulls indices from a [`Sampler`], fetches the matching items from a
//! [`Dataset`] and groups them into batches. With a batch size equal to the dataset length
//! and a [`SequentialSampler`], one batch is exactly the full-batch input of the reference
//! training run.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{reference_dataset, Dataset, VecDataset};
pub use samplers::{Draw, RandomSampler, Sampler, SequentialSampler};
