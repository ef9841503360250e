use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf [`Value`] stores an implementation of this
/// trait in the output node's `grad_fn` slot. During [`Value::backward`] it is used to
/// propagate gradients according to the chain rule.
///
/// Implementations capture, at forward time, every forward value their derivative rule
/// needs (operand values, the node's own output). They never recompute the forward pass.
///
/// The trait is only `Debug`: nodes are `Rc`-based and a graph never crosses threads.
pub trait BackwardOp: Debug {
    /// The registry tag of the operation that produced the node.
    fn kind(&self) -> OpKind;

    /// Computes \( \frac{dL}{d\text{Input}_i} \) for each input, given
    /// \( \frac{dL}{d\text{Output}} \) (`grad_output`).
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)`: one gradient contribution per input. The order **must** match
    ///   [`BackwardOp::inputs`].
    /// * `Err(NeuroGradError)`: if the local derivative is undefined at the stored
    ///   forward values (e.g. `DomainError` for `pow` at zero).
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError>;

    /// Returns handles to the operand nodes that participated in the forward operation.
    ///
    /// These are the DAG edges walked by the topological sort.
    fn inputs(&self) -> Vec<Value>;
}
