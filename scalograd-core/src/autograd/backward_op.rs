use crate::value::Value;

/// Identifies which operation produced a node. Diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Div,
    Pow,
    Exp,
    Tanh,
    Relu,
}

/// The backward rule of a node, fixed when the node is created.
///
/// Each variant stores handles to the operands of the forward operation (plus the
/// exponent for `Pow`). The derivative formula is picked by matching on the variant during
/// the backward pass, so no closures capturing graph references are ever stored.
///
/// Subtraction and negation do not have their own variants: `a - b` is built as
/// `a + b * (-1)`, so their gradients flow through the `Add` and `Mul` rules.
#[derive(Debug, Clone, Default)]
pub enum BackwardOp {
    /// User-created node: nothing to propagate.
    #[default]
    Leaf,
    Add { a: Value, b: Value },
    Mul { a: Value, b: Value },
    Div { a: Value, b: Value },
    Pow { base: Value, exponent: f64 },
    Exp { input: Value },
    Tanh { input: Value },
    Relu { input: Value },
}

impl BackwardOp {
    pub fn kind(&self) -> OpKind {
        match self {
            BackwardOp::Leaf => OpKind::Leaf,
            BackwardOp::Add { .. } => OpKind::Add,
            BackwardOp::Mul { .. } => OpKind::Mul,
            BackwardOp::Div { .. } => OpKind::Div,
            BackwardOp::Pow { .. } => OpKind::Pow,
            BackwardOp::Exp { .. } => OpKind::Exp,
            BackwardOp::Tanh { .. } => OpKind::Tanh,
            BackwardOp::Relu { .. } => OpKind::Relu,
        }
    }

    /// Returns the operands of the forward operation.
    ///
    /// The order **must** match the order of the gradients returned by [`BackwardOp::backward`].
    pub fn inputs(&self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { a, b } | BackwardOp::Mul { a, b } | BackwardOp::Div { a, b } => {
                vec![a.clone(), b.clone()]
            }
            BackwardOp::Pow { base, .. } => vec![base.clone()],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } | BackwardOp::Relu { input } => {
                vec![input.clone()]
            }
        }
    }

    /// Consumes the rule and hands back its operand handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { a, b } | BackwardOp::Mul { a, b } | BackwardOp::Div { a, b } => {
                vec![a, b]
            }
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } | BackwardOp::Relu { input } => {
                vec![input]
            }
        }
    }

    /// Computes dL/dInput for each operand given dL/dOutput (`grad_output`).
    ///
    /// `output_data` is the forward value of the node owning this rule; `exp` and `tanh`
    /// express their derivative through it.
    ///
    /// # Returns
    /// One contribution per operand, in the order of [`BackwardOp::inputs`]. The caller
    /// adds them into the operands' gradients.
    pub fn backward(&self, output_data: f64, grad_output: f64) -> Vec<f64> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { .. } => vec![grad_output, grad_output],
            BackwardOp::Mul { a, b } => vec![b.data() * grad_output, a.data() * grad_output],
            // `powf`, not `powi`: `powi(-2)` rounds twice.
            BackwardOp::Div { a, b } => {
                let b_data = b.data();
                vec![
                    b_data.powf(-1.0) * grad_output,
                    a.data() * (-b_data.powf(-2.0)) * grad_output,
                ]
            }
            // Left as is at base 0 with exponent < 1: the result is inf/NaN.
            BackwardOp::Pow { base, exponent } => {
                vec![exponent * base.data().powf(exponent - 1.0) * grad_output]
            }
            BackwardOp::Exp { .. } => vec![output_data * grad_output],
            BackwardOp::Tanh { .. } => vec![(1.0 - output_data.powi(2)) * grad_output],
            BackwardOp::Relu { input } => {
                vec![if input.data() > 0.0 { grad_output } else { 0.0 }]
            }
        }
    }
}
