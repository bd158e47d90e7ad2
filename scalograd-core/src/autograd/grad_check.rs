use crate::error::ScalogradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input")]
    NoInputs,
}

impl From<ScalogradError> for GradCheckError {
    fn from(err: ScalogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` is called once on fresh leaves built from `inputs` and differentiated with
/// `backward()`. Then, for every input, it is re-evaluated at `x ± epsilon` to estimate
/// the partial derivative numerically. A pair is accepted when
/// `|analytical - numerical| <= abs_tol + rel_tol * |numerical|`.
///
/// # Returns
/// The analytical gradients, one per input, when every check passes.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalogradError>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::NoInputs);
    }

    let leaves = Value::from_slice(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    let evaluate_at = |index: usize, point: f64| -> Result<f64, GradCheckError> {
        let mut perturbed = inputs.to_vec();
        perturbed[index] = point;
        Ok(func(&Value::from_slice(&perturbed))?.data())
    };

    for (i, (&x, &analytical_grad)) in inputs.iter().zip(analytical.iter()).enumerate() {
        let loss_plus = evaluate_at(i, x + epsilon)?;
        let loss_minus = evaluate_at(i, x - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > abs_tol + rel_tol * numerical_grad.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(analytical)
}
