// src/value_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;

/// Internal storage and autograd metadata for a scalar `Value`.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` struct so that many
/// expressions can share one node while backward passes mutate its gradient.
#[derive(Debug)]
pub struct ValueData {
    /// The forward result (or the user-supplied leaf value).
    pub(crate) data: f64,
    /// Accumulated d(output)/d(this node). Starts at 0.0.
    pub(crate) grad: f64,
    /// The operation that produced this node, holding its operands.
    /// Leaf nodes carry `BackwardOp::Leaf`.
    pub(crate) grad_fn: BackwardOp,
    /// Optional debug name.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the data of a leaf node: no operands, zero gradient.
    pub fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: BackwardOp::Leaf,
            label: None,
        }
    }

    /// Creates the data of a node produced by `grad_fn`.
    pub fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn,
            label: None,
        }
    }
}

// Dropping the last handle to a long chain would otherwise recurse once per node.
// Operands that are uniquely owned are unlinked here iteratively instead.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.grad_fn).into_inputs();
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut inner = cell.into_inner();
                pending.extend(std::mem::take(&mut inner.grad_fn).into_inputs());
            }
        }
    }
}
