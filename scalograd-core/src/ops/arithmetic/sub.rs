use crate::ops::arithmetic::add::{add_op, add_scalar_op};
use crate::ops::arithmetic::neg::neg_op;
use crate::value::Value;

/// Subtracts two nodes: `a + (-b)`.
///
/// Composed from negation and addition; gradients flow through those rules.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

/// `a - scalar`.
pub fn sub_scalar_op(a: &Value, scalar: f64) -> Value {
    sub_op(a, &Value::new(scalar))
}

/// `scalar - a`, computed as `(-a) + scalar`.
pub fn rsub_scalar_op(scalar: f64, a: &Value) -> Value {
    add_scalar_op(&neg_op(a), scalar)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
