use scalograd_data::{DataLoader, Dataset, Sampler};
use scalograd_core::ScalogradError;

/// Drains one pass of a loader of `(features, target)` pairs into full-batch vectors.
#[allow(dead_code)]
pub fn unzip_pass<D, S>(
    loader: &mut DataLoader<D, S>,
) -> Result<Vec<(Vec<Vec<f64>>, Vec<f64>)>, ScalogradError>
where
    D: Dataset<Item = (Vec<f64>, f64)>,
    S: Sampler,
{
    loader
        .by_ref()
        .map(|batch| batch.map(|items| items.into_iter().unzip()))
        .collect()
}
