//! # Automatic differentiation
//!
//! - [`BackwardOp`]: the per-operation local derivative rule stored on non-leaf nodes.
//! - `graph`: topological ordering of the computation graph (used by
//!   [`Value::backward`]).
//! - [`grad_check`]: finite-difference verification of analytic gradients.
//! - [`zero_grad`]: resets the gradients of a collection of nodes.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;

use crate::value::Value;

/// Resets the gradient of every node in `nodes` to zero.
///
/// Must be called on the parameters before each fresh backward pass: the engine itself
/// only accumulates.
pub fn zero_grad<V: AsRef<Value>>(nodes: &[V]) {
    for node in nodes {
        node.as_ref().zero_grad();
    }
}
