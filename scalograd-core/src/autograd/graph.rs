use crate::autograd::OpKind;
use crate::value::Value;
use crate::value_data::ValueData;
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node: the address of its shared `RefCell<ValueData>`.
///
/// Stable for as long as any handle to the node is alive, which the backward pass
/// guarantees by holding a `Value` for every node it orders.
pub type NodeId = *const RefCell<ValueData>;

/// Orders every node reachable from `root` so that each node appears after all of its
/// operands (post-order). `root` is always last.
///
/// The traversal is iterative with an explicit stack, so graph depth is bounded by heap
/// memory rather than by the thread's stack. Nodes are deduplicated by identity: two
/// distinct nodes holding the same number are visited separately.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Value> = Vec::new();
    // (node, expanded): a node is emitted when popped the second time, after its operands.
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let inputs = node.inputs();
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted
}

/// A snapshot of the graph below an output node, in topological order.
#[derive(Debug)]
pub struct ComputationGraph {
    /// Post-order: operands first, output last.
    order: Vec<Value>,
}

impl ComputationGraph {
    pub fn build(output: &Value) -> Self {
        ComputationGraph {
            order: topological_sort(output),
        }
    }

    /// Number of distinct nodes reachable from the output (inclusive).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in post-order (operands before consumers).
    pub fn nodes(&self) -> &[Value] {
        &self.order
    }

    /// The node the graph was built from.
    pub fn output(&self) -> Option<&Value> {
        self.order.last()
    }

    /// Resets the gradient of every node in the graph, intermediates included.
    pub fn zero_grad(&self) {
        for node in &self.order {
            node.zero_grad();
        }
    }

    /// Seeds the output gradient with `1.0` and replays every backward rule from the
    /// output towards the leaves, accumulating into operand gradients.
    pub fn backward(&self) {
        let Some(output) = self.output() else {
            return;
        };
        debug!("backward: {} node(s) reachable from output", self.order.len());
        output.set_grad(1.0);

        for node in self.order.iter().rev() {
            // Contributions are computed under a shared borrow and applied afterwards, so an
            // operand never gets mutably borrowed while its consumer is still borrowed.
            let (inputs, input_grads) = {
                let guard = node.read_data();
                if guard.grad_fn.kind() == OpKind::Leaf {
                    continue;
                }
                (
                    guard.grad_fn.inputs(),
                    guard.grad_fn.backward(guard.data, guard.grad),
                )
            };
            trace!(
                "backward: {:?} node, propagating to {} operand(s)",
                node.op_kind(),
                inputs.len()
            );
            for (input, grad) in inputs.iter().zip(input_grads) {
                input.acc_grad(grad);
            }
        }
    }
}
