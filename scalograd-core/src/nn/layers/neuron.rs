use crate::error::ScalogradError;
use crate::nn::init::{uniform_vec, DEFAULT_HIGH, DEFAULT_LOW};
use crate::nn::layers::Activation;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single unit computing `act(b + Σ wᵢ·xᵢ)`.
///
/// The weighted sum is folded left starting from the bias, so the graph of one neuron is
/// `((b + w₀x₀) + w₁x₁) + …`.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub(crate) weights: Vec<Value>,
    pub(crate) bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias drawn from `[-1, 1)`.
    ///
    /// The weights are drawn first, then the bias.
    ///
    /// # Errors
    /// `ConfigurationError` when `nin` is zero.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalogradError> {
        if nin == 0 {
            return Err(ScalogradError::ConfigurationError(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let mut params = uniform_vec(rng, nin + 1, DEFAULT_LOW, DEFAULT_HIGH)?;
        let bias = params.pop().ok_or_else(|| {
            ScalogradError::ConfigurationError("neuron initialization drew no bias".to_string())
        })?;
        Ok(Neuron {
            weights: params,
            bias,
            activation,
        })
    }

    /// Builds a neuron from explicit parameter values.
    pub fn from_weights(
        weights: &[f64],
        bias: f64,
        activation: Activation,
    ) -> Result<Self, ScalogradError> {
        if weights.is_empty() {
            return Err(ScalogradError::ConfigurationError(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Neuron {
            weights: Value::from_slice(weights),
            bias: Value::new(bias),
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes this neuron's output node for one input vector.
    ///
    /// # Errors
    /// `DimensionMismatch` when `x.len()` differs from the number of weights.
    pub fn output(&self, x: &[Value]) -> Result<Value, ScalogradError> {
        if x.len() != self.weights.len() {
            return Err(ScalogradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: x.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(x)
            .fold(self.bias.clone(), |acc, (w, xi)| &acc + &(w * xi));
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalogradError> {
        Ok(vec![self.output(input)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation, self.nin())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
