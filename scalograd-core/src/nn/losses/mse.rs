// scalograd-core/src/nn/losses/mse.rs

use crate::error::ScalogradError;
use crate::ops::arithmetic::{div_op, sub_op};
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: `'mean' | 'sum'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalogradError::ConfigurationError(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between targets and predictions, built from engine ops.
///
/// The loss is an ordinary node: calling `backward()` on it fills the gradients of every
/// prediction (and of everything the predictions were computed from).
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Creates the loss from a reduction name (`"mean"` or `"sum"`, case-insensitive).
    pub fn from_reduction_str(reduction: &str) -> Result<Self, ScalogradError> {
        Ok(MSELoss::new(reduction.parse()?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (y_true - y_pred)²`, divided by the number of pairs for `Mean`.
    ///
    /// The terms are summed left to right; the mean divides the sum by a leaf holding
    /// the pair count.
    ///
    /// # Errors
    /// `LengthMismatch` when the slices differ in length, `EmptyInput` when both are empty.
    pub fn calculate(&self, y_true: &[Value], y_pred: &[Value]) -> Result<Value, ScalogradError> {
        if y_true.len() != y_pred.len() {
            return Err(ScalogradError::LengthMismatch {
                left: y_true.len(),
                right: y_pred.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        if y_true.is_empty() {
            return Err(ScalogradError::EmptyInput("MSELoss".to_string()));
        }

        let squared_errors = y_true
            .iter()
            .zip(y_pred)
            .map(|(yt, yp)| sub_op(yt, yp).pow(2))
            .collect::<Result<Vec<_>, _>>()?;
        let total: Value = squared_errors.into_iter().sum();

        Ok(match self.reduction {
            Reduction::Mean => div_op(&total, &Value::new(y_true.len() as f64)),
            Reduction::Sum => total,
        })
    }

    /// Same as [`MSELoss::calculate`] with plain-number targets promoted to leaves.
    pub fn calculate_targets(
        &self,
        y_true: &[f64],
        y_pred: &[Value],
    ) -> Result<Value, ScalogradError> {
        self.calculate(&Value::from_slice(y_true), y_pred)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
