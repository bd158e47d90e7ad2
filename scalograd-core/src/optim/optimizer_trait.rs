use crate::error::ScalogradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter nodes in place from the gradients
/// left on them by a backward pass.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalogradError` otherwise.
    fn step(&mut self) -> Result<(), ScalogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this has to run between
    /// iterations.
    fn zero_grad(&mut self) {
        for param in self.params() {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64;

    /// Changes the learning rate used by subsequent steps.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is negative or not finite.
    fn set_lr(&mut self, lr: f64) -> Result<(), ScalogradError>;

    /// The parameters managed by the optimizer, in update order.
    fn params(&self) -> &[Value];
}

/// Checks that a hyperparameter is a finite, non-negative number.
pub(crate) fn validate_hyperparameter(name: &str, value: f64) -> Result<(), ScalogradError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScalogradError::ConfigurationError(format!(
            "Invalid {}: {} (must be finite and >= 0)",
            name, value
        )));
    }
    Ok(())
}
