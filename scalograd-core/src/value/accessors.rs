// src/value/accessors.rs
use crate::autograd::graph::NodeId;
use crate::autograd::OpKind;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the value of this node.
    ///
    /// Intended for trainable leaf parameters (optimizer steps). Nodes built on top of this
    /// one keep the value they computed at construction time.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the debug label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: &str) {
        self.write_data().label = Some(label.to_string());
    }

    /// Returns which operation produced this node.
    pub fn op_kind(&self) -> OpKind {
        self.read_data().grad_fn.kind()
    }

    /// True for nodes that were not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.op_kind() == OpKind::Leaf
    }

    /// Returns handles to the operands that produced this node, in operation order.
    pub fn inputs(&self) -> Vec<Value> {
        self.read_data().grad_fn.inputs()
    }

    /// Identity of the node. Two handles share an id iff they alias the same node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}
