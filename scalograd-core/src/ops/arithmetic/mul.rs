use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `a` receives `b * grad`, `b` receives `a * grad`. When `a` and `b` are the
/// same node both contributions land on it.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() * b.data(),
        BackwardOp::Mul {
            a: a.clone(),
            b: b.clone(),
        },
    )
}

/// `a * scalar`.
pub fn mul_scalar_op(a: &Value, scalar: f64) -> Value {
    mul_op(a, &Value::new(scalar))
}

/// `scalar * a`. Multiplication commutes, so this is `a * scalar`.
pub fn rmul_scalar_op(scalar: f64, a: &Value) -> Value {
    mul_scalar_op(a, scalar)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
