use super::traits::Dataset;
use scalograd_core::ScalogradError;

/// A dataset of `(input, target)` pairs held in two parallel vectors.
///
/// # Type Parameters
///
/// * `I`: the input of one sample, e.g. `Vec<f64>` of features.
/// * `T`: the target of one sample, e.g. `f64`.
#[derive(Debug, Clone)]
pub struct VecDataset<I: Clone, T: Clone> {
    pub(crate) inputs: Vec<I>,
    pub(crate) targets: Vec<T>,
}

impl<I: Clone, T: Clone> VecDataset<I, T> {
    /// Pairs `inputs[i]` with `targets[i]`.
    ///
    /// # Errors
    ///
    /// `ScalogradError::LengthMismatch` if the two vectors differ in length.
    pub fn new(inputs: Vec<I>, targets: Vec<T>) -> Result<Self, ScalogradError> {
        if inputs.len() != targets.len() {
            return Err(ScalogradError::LengthMismatch {
                left: inputs.len(),
                right: targets.len(),
                operation: "VecDataset new".to_string(),
            });
        }
        Ok(Self { inputs, targets })
    }

    pub fn inputs(&self) -> &[I] {
        &self.inputs
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Splits the dataset back into its inputs and targets.
    pub fn into_parts(self) -> (Vec<I>, Vec<T>) {
        (self.inputs, self.targets)
    }
}

impl<I: Clone, T: Clone> Dataset for VecDataset<I, T> {
    type Item = (I, T);

    /// Returns a clone of the pair at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalogradError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(input), Some(target)) => Ok((input.clone(), target.clone())),
            _ => Err(ScalogradError::IndexOutOfBounds {
                index,
                len: self.inputs.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
