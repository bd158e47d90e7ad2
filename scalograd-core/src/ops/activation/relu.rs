use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Rectified linear unit: `max(0, a)`.
///
/// Backward: `a` receives `grad` when its value is strictly positive, `0` otherwise
/// (including at exactly zero).
pub fn relu_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        |input| BackwardOp::Relu { input },
    )
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
