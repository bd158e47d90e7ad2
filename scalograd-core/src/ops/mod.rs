//! # Node Operations (`ops`)
//!
//! Every differentiable operation on [`Value`] lives here, grouped by kind.
//!
//! - **`_op` functions:** each operation has a core function (`add_op`, `tanh_op`, ...) that
//!   computes the forward number and records the matching
//!   [`BackwardOp`](crate::autograd::BackwardOp) on the new node. Operator overloads and the
//!   methods on `Value` (`pow`, `exp`, `tanh`, `relu`) are thin wrappers around them.
//! - **Scalar promotion:** the `*_scalar_op` variants wrap a plain `f64` into a fresh leaf
//!   before building the node, so plain numbers never appear inside a graph.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: elementary functions (exp).
//! - [`activation`]: tanh and relu.

use crate::autograd::BackwardOp;
use crate::value::Value;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Builds the node for a unary operation.
///
/// `forward` maps the operand's number to the result; `grad_fn` builds the backward rule
/// from a handle to the operand.
pub(crate) fn apply_unary_op<F, G>(input: &Value, forward: F, grad_fn: G) -> Value
where
    F: FnOnce(f64) -> f64,
    G: FnOnce(Value) -> BackwardOp,
{
    let data = forward(input.data());
    Value::from_op(data, grad_fn(input.clone()))
}
