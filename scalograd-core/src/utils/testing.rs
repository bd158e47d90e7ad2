use crate::value::Value;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with the node's debug form otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.data() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradients of several nodes against expected numbers, index by index.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Gradient count mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a.grad() - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value_near_accepts_close_values() {
        check_value_near(&Value::new(1.0 + 1e-10), 1.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "Value mismatch")]
    fn test_check_value_near_rejects_nan() {
        check_value_near(&Value::new(f64::NAN), 1.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch at index 1")]
    fn test_check_grads_near_reports_index() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        (&a * &b).backward();
        check_grads_near(&[a, b], &[3.0, 0.0], 1e-12);
    }
}
