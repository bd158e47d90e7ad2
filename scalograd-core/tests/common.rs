use scalograd_core::Value;

/// The 4-sample, 3-feature dataset of the reference training run.
///
/// Mirrors `scalograd_data::reference_dataset`. `scalograd-data` depends on this crate, so
/// the core tests cannot pull the fixture from there.
#[allow(dead_code)]
pub fn reference_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    (
        vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )
}

// Each integration test file compiles this module separately and not all of them use
// every helper.
#[allow(dead_code)]
pub fn leaves(data: &[f64]) -> Vec<Value> {
    Value::from_slice(data)
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
