use crate::error::ScalogradError;
use crate::optim::optimizer_trait::{validate_hyperparameter, Optimizer};
use crate::value::Value;
use log::{debug, warn};

/// Implements Stochastic Gradient Descent.
///
/// With the default hyperparameters every step is exactly `v -= lr * g`.
/// Optional momentum keeps a velocity per parameter (`b = μ·b + g`, then `v -= lr·b`) and
/// optional weight decay adds an L2 term to the gradient (`g += λ·v`) before that.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One velocity per parameter, allocated on the first step that uses momentum.
    momentum_buffers: Option<Vec<f64>>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over `params`.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is negative or not finite.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, ScalogradError> {
        validate_hyperparameter("learning rate", lr)?;
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers: None,
        })
    }

    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, ScalogradError> {
        validate_hyperparameter("momentum", momentum)?;
        self.momentum = momentum;
        Ok(self)
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, ScalogradError> {
        validate_hyperparameter("weight decay", weight_decay)?;
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalogradError> {
        debug!(
            "SGD step: {} parameter(s), lr={}, momentum={}, weight_decay={}",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );

        if self.momentum != 0.0 && self.momentum_buffers.is_none() {
            self.momentum_buffers = Some(vec![0.0; self.params.len()]);
        }

        let mut non_finite = 0usize;
        for (i, param) in self.params.iter().enumerate() {
            let value = param.data();
            let mut grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }
            if self.weight_decay != 0.0 {
                grad += self.weight_decay * value;
            }
            let update = match self.momentum_buffers.as_mut() {
                Some(buffers) if self.momentum != 0.0 => {
                    let buffer = buffers.get_mut(i).ok_or(ScalogradError::IndexOutOfBounds {
                        index: i,
                        len: self.params.len(),
                    })?;
                    *buffer = self.momentum * *buffer + grad;
                    *buffer
                }
                _ => grad,
            };
            param.set_data(value - self.lr * update);
        }

        if non_finite > 0 {
            warn!(
                "SGD step applied {} non-finite gradient(s); parameters are now non-finite",
                non_finite
            );
        }
        Ok(())
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), ScalogradError> {
        validate_hyperparameter("learning rate", lr)?;
        self.lr = lr;
        Ok(())
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
