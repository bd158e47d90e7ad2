// src/value/mod.rs

use crate::autograd::BackwardOp;
use crate::error::ScalogradError;
use crate::value_data::ValueData;
use num_traits::ToPrimitive;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod debug;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** cloning a `Value` is cheap and yields another handle to the
///     *same* node, which is how fan-out is expressed (`&a * &a` uses `a` twice).
/// 2.  **Interior Mutability:** the gradient (and, for parameters, the value) can be
///     updated through a shared handle during backward passes and optimizer steps.
///
/// Nodes are `!Send`; a graph lives on the thread that built it.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new leaf node holding `data` with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a new labelled leaf node.
    pub fn with_label(data: f64, label: &str) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Creates a leaf node from any primitive numeric type.
    ///
    /// # Errors
    /// Returns `ScalogradError::InvalidOperand` if `number` has no `f64` representation.
    pub fn from_numeric<N: ToPrimitive>(number: N) -> Result<Self, ScalogradError> {
        number.to_f64().map(Value::new).ok_or_else(|| {
            ScalogradError::invalid_operand("leaf construction", "value is not representable as f64")
        })
    }

    /// Promotes a slice of plain numbers to leaf nodes.
    pub fn from_slice(data: &[f64]) -> Vec<Value> {
        data.iter().copied().map(Value::new).collect()
    }

    /// Creates the result node of an operation. Used by the `ops` module.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, grad_fn))),
        }
    }

    /// Helper to borrow the node data immutably.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Helper to borrow the node data mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}
