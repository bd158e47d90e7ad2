use crate::error::ScalogradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module maps a vector of input nodes to a vector of output nodes and owns a set of
/// trainable leaf parameters. Parameters are returned as handles: updating one through an
/// optimizer updates the module.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns a `ScalogradError` if the input does not fit the module (wrong width).
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalogradError>;

    /// Returns handles to every learnable parameter, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns every parameter along with a hierarchical name
    /// (e.g. `"layer0.neuron1.weight2"`, `"layer0.neuron1.bias"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
