use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the upstream gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() + b.data(),
        BackwardOp::Add {
            a: a.clone(),
            b: b.clone(),
        },
    )
}

/// `a + scalar`, the scalar promoted to a fresh leaf.
pub fn add_scalar_op(a: &Value, scalar: f64) -> Value {
    add_op(a, &Value::new(scalar))
}

/// `scalar + a`. Addition commutes, so this is `a + scalar`.
pub fn radd_scalar_op(scalar: f64, a: &Value) -> Value {
    add_scalar_op(a, scalar)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
