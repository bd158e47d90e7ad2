// src/value/autograd_methods.rs

use crate::autograd::graph::ComputationGraph;
use crate::value::Value;

impl Value {
    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// The output gradient is seeded to `1.0` (assigned, not added); every other node
    /// reachable from here *accumulates* into its gradient. Calling `backward` twice
    /// without `zero_grad` in between therefore doubles the ancestors' gradients, the same
    /// accumulation semantics mainstream autograd libraries use.
    ///
    /// Never fails. The operand graph is acyclic by construction.
    pub fn backward(&self) {
        let graph = ComputationGraph::build(self);
        graph.backward();
    }

    /// Resets the gradient of this node to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds `delta` into this node's gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }
}
