use crate::error::ScalogradError;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// `nout` independent neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `nout` freshly initialized neurons, drawn one after the other.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalogradError> {
        if nout == 0 {
            return Err(ScalogradError::ConfigurationError(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, activation, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Assembles a layer from existing neurons. They must all read the same number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalogradError> {
        let first = neurons.first().ok_or_else(|| {
            ScalogradError::ConfigurationError("a layer needs at least one neuron".to_string())
        })?;
        let nin = first.nin();
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalogradError::DimensionMismatch {
                expected: nin,
                actual: odd.nin(),
                operation: "Layer construction".to_string(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output node per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalogradError> {
        self.neurons.iter().map(|n| n.output(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", j, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, n) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
