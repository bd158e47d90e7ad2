use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Hyperbolic tangent, computed as `(e^(2x) - 1) / (e^(2x) + 1)`.
///
/// The closed form overflows for large positive inputs (`inf / inf` is NaN). No
/// stabilization is applied.
///
/// Backward: `a` receives `(1 - t²) * grad` where `t` is the node's forward value.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        |x| {
            let e = (2.0 * x).exp();
            (e - 1.0) / (e + 1.0)
        },
        |input| BackwardOp::Tanh { input },
    )
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
