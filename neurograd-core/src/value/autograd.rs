// src/value/autograd.rs

use crate::autograd::graph::topological_sort;
use crate::error::NeuroGradError;
use crate::value::Value;
use log::debug;

impl Value {
    /// Computes the gradient of this node w.r.t. every node it was derived from.
    ///
    /// The graph is ordered topologically, this node's gradient is set to `1.0`, then
    /// every node's backward closure runs once, in reverse topological order, adding its
    /// contributions into its operands' gradients.
    ///
    /// Gradients are **accumulated**, never reset: zeroing them before a fresh pass is
    /// the caller's job (`zero_grad`, `Module::zero_grad`, `Optimizer::zero_grad`).
    /// Nodes that are not reachable from `self` are left untouched.
    ///
    /// # Errors
    /// * `CyclicGraph` if the ordering finds a cycle (nothing is written in that case).
    /// * `DomainError` if a local derivative is undefined (e.g. `pow` at zero with an
    ///   exponent below one). Gradients written before the failure are left as they are.
    pub fn backward(&self) -> Result<(), NeuroGradError> {
        let sorted_nodes = topological_sort(self)?;
        debug!(
            "backward() over {} nodes from root {}",
            sorted_nodes.len(),
            self
        );

        self.set_grad(1.0);

        for node in sorted_nodes.iter().rev() {
            // Leaves are the base case.
            let Some(grad_fn) = node.grad_fn() else {
                continue;
            };
            let upstream = node.grad();

            let input_grads = grad_fn.backward(upstream)?;
            let inputs = grad_fn.inputs();
            if input_grads.len() != inputs.len() {
                return Err(NeuroGradError::InternalError(format!(
                    "BackwardOp {} returned {} gradients for {} inputs",
                    grad_fn.kind(),
                    input_grads.len(),
                    inputs.len()
                )));
            }

            for (input, grad) in inputs.iter().zip(input_grads) {
                input.accumulate_grad(grad);
            }
        }

        Ok(())
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.node.borrow_mut().grad = grad;
    }

    pub(crate) fn accumulate_grad(&self, grad: f64) {
        self.node.borrow_mut().grad += grad;
    }
}
