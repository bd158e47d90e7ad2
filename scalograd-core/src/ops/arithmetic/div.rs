use crate::autograd::BackwardOp;
use crate::value::Value;

/// Divides two nodes: `a * b⁻¹`.
///
/// Backward: `a` receives `grad / b`, `b` receives `-a / b² * grad`.
/// A zero divisor is not trapped; the IEEE-754 infinity or NaN propagates.
pub fn div_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() * b.data().powf(-1.0),
        BackwardOp::Div {
            a: a.clone(),
            b: b.clone(),
        },
    )
}

/// `a / scalar`.
pub fn div_scalar_op(a: &Value, scalar: f64) -> Value {
    div_op(a, &Value::new(scalar))
}

/// `scalar / a`, the scalar promoted to the numerator leaf.
pub fn rdiv_scalar_op(scalar: f64, a: &Value) -> Value {
    div_op(&Value::new(scalar), a)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
