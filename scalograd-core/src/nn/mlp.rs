use crate::error::ScalogradError;
use crate::nn::layers::{Activation, Layer, Neuron};
use crate::nn::module::Module;
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: layers of widths `[nin] + sizes`, chained.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

/// Explicit parameters of one neuron: `(weights, bias)`.
pub type NeuronWeights = (Vec<f64>, f64);

impl Mlp {
    /// Creates a network where every neuron (output layer included) uses `tanh`.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalogradError> {
        Self::with_activation(nin, sizes, Activation::Tanh, rng)
    }

    /// Creates a network using `activation` in every neuron.
    ///
    /// Parameters are drawn layer by layer, neuron by neuron, weights before bias.
    ///
    /// # Errors
    /// `ConfigurationError` when `sizes` is empty or any width is zero.
    pub fn with_activation<R: Rng + ?Sized>(
        nin: usize,
        sizes: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalogradError> {
        if sizes.is_empty() {
            return Err(ScalogradError::ConfigurationError(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(sizes.len());
        let mut fan_in = nin;
        for &nout in sizes {
            layers.push(Layer::new(fan_in, nout, activation, &mut *rng)?);
            fan_in = nout;
        }
        let mlp = Mlp { layers };
        debug!(
            "Built MLP {} -> {:?} ({} parameters)",
            nin,
            sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Builds a network from explicit parameter values, one entry per layer and per neuron.
    ///
    /// # Errors
    /// `ConfigurationError` for an empty network or layer, `DimensionMismatch` when a
    /// layer's fan-in differs from the previous layer's width.
    pub fn from_weights(
        layers: &[Vec<NeuronWeights>],
        activation: Activation,
    ) -> Result<Self, ScalogradError> {
        let layers = layers
            .iter()
            .map(|neurons| {
                let neurons = neurons
                    .iter()
                    .map(|(w, b)| Neuron::from_weights(w, *b, activation))
                    .collect::<Result<Vec<_>, _>>()?;
                Layer::from_neurons(neurons)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_layers(layers)
    }

    /// Chains existing layers, checking that consecutive widths agree.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalogradError> {
        if layers.is_empty() {
            return Err(ScalogradError::ConfigurationError(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(ScalogradError::DimensionMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                    operation: "MLP construction".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Forward pass for a network whose last layer has a single neuron.
    ///
    /// # Errors
    /// `DimensionMismatch` when the output width is not 1, or when the input width is wrong.
    pub fn forward_scalar(&self, input: &[Value]) -> Result<Value, ScalogradError> {
        let mut outputs = self.forward(input)?;
        if outputs.len() != 1 {
            return Err(ScalogradError::DimensionMismatch {
                expected: 1,
                actual: outputs.len(),
                operation: "MLP forward_scalar".to_string(),
            });
        }
        outputs.pop().ok_or_else(|| ScalogradError::EmptyInput("MLP output".to_string()))
    }

    /// Runs the network on plain numbers and returns plain numbers.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, ScalogradError> {
        let outputs = self.forward(&Value::from_slice(input))?;
        Ok(outputs.iter().map(Value::data).collect())
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalogradError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", k, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
