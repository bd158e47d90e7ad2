//! # Autograd
//!
//! Reverse-mode differentiation over scalar [`Value`](crate::Value) graphs.
//!
//! - [`backward_op`]: the per-node backward rule, a tagged variant holding the operands.
//! - [`graph`]: iterative topological sort and the backward driver.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, OpKind};
pub use graph::{topological_sort, ComputationGraph, NodeId};
