use super::vec_dataset::VecDataset;

/// The four-sample, three-feature toy dataset of the reference training run, with
/// targets `[1, -1, -1, 1]`.
pub fn reference_dataset() -> VecDataset<Vec<f64>, f64> {
    VecDataset {
        inputs: vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        targets: vec![1.0, -1.0, -1.0, 1.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;

    #[test]
    fn test_reference_dataset_shape() {
        let dataset = reference_dataset();
        assert_eq!(dataset.len(), 4);
        assert!(dataset.inputs().iter().all(|x| x.len() == 3));
        assert_eq!(dataset.targets(), &[1.0, -1.0, -1.0, 1.0]);
    }
}
