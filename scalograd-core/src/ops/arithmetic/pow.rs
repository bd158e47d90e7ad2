use crate::autograd::BackwardOp;
use crate::error::ScalogradError;
use crate::value::Value;
use num_traits::ToPrimitive;

/// Raises a node to a constant exponent: `base^exponent`.
///
/// The exponent is a plain number, never a node, so it receives no gradient.
/// Backward: `base` receives `exponent * base^(exponent - 1) * grad`.
///
/// # Errors
/// [`ScalogradError::InvalidOperand`] when `exponent` is NaN or infinite.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalogradError> {
    if !exponent.is_finite() {
        return Err(ScalogradError::invalid_operand(
            "pow",
            format!("exponent must be a finite number, got {}", exponent),
        ));
    }
    Ok(Value::from_op(
        base.data().powf(exponent),
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
    ))
}

impl Value {
    /// Raises this node to a numeric exponent (integer or float).
    ///
    /// # Errors
    /// [`ScalogradError::InvalidOperand`] when the exponent cannot be represented as a
    /// finite `f64`.
    pub fn pow<E: ToPrimitive>(&self, exponent: E) -> Result<Value, ScalogradError> {
        let exponent = exponent.to_f64().ok_or_else(|| {
            ScalogradError::invalid_operand("pow", "exponent is not representable as f64")
        })?;
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
