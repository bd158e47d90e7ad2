use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Natural exponential: `e^a`.
///
/// Backward: `a` receives `e^a * grad`, read from the node's own forward value.
/// Overflow is not trapped; large inputs give `inf`.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, f64::exp, |input| BackwardOp::Exp { input })
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
