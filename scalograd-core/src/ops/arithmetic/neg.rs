use crate::ops::arithmetic::mul::mul_scalar_op;
use crate::value::Value;

/// Negates a node: `a * (-1)`.
///
/// There is no dedicated backward rule; the gradient flows through multiplication by a
/// `-1` leaf.
pub fn neg_op(a: &Value) -> Value {
    mul_scalar_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
