//! # Scalar computation-graph nodes
//!
//! [`Value`] is the fundamental unit of the engine: a reference-counted handle to a
//! node holding a forward value, an accumulated gradient and, for non-leaf nodes, the
//! [`BackwardOp`] that produced it (which in turn records the operand nodes).
//!
//! Cloning a `Value` clones the handle, not the node. Every clone observes the same
//! value and gradient, which is what lets one node be shared by many consumers and
//! receive gradient contributions from all of them.
//!
//! Nodes are `Rc<RefCell<_>>`-based and therefore neither `Send` nor `Sync`. A graph
//! lives on exactly one thread; concurrent training must build fully independent graphs.

use crate::autograd::BackwardOp;
use crate::ops::OpKind;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub mod autograd;
pub mod math_methods;
pub mod operators;

/// Internal node storage.
pub(crate) struct ValueData {
    /// Forward value.
    pub(crate) data: f64,
    /// dL/d(this node); written by the backward pass.
    pub(crate) grad: f64,
    /// `None` for leaves.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

// Unlinks the operand chain with an explicit work list. The derived drop would
// recurse once per graph level and overflow on long chains.
impl Drop for ValueData {
    fn drop(&mut self) {
        let Some(grad_fn) = self.grad_fn.take() else {
            return;
        };
        let mut pending = vec![grad_fn];
        while let Some(op) = pending.pop() {
            if Rc::strong_count(&op) > 1 {
                continue;
            }
            // Hold our own handles so releasing `op` cannot free an operand in place.
            let operands = op.inputs();
            drop(op);
            for operand in operands {
                if Rc::strong_count(&operand.node) > 1 {
                    continue;
                }
                if let Ok(mut data) = operand.node.try_borrow_mut() {
                    if let Some(next) = data.grad_fn.take() {
                        pending.push(next);
                    }
                }
            }
        }
    }
}

/// Stable identity of a node, used as key during graph traversal.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Handle to a scalar node in the autograd computation graph.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node with the given value and a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                grad_fn: None,
            })),
        }
    }

    /// Creates a non-leaf node produced by `grad_fn`.
    ///
    /// This is how every built-in operation inserts itself into the graph, and the
    /// extension point for elementary functions outside the built-in registry: compute
    /// the forward value, capture what the derivative needs in a [`BackwardOp`], and
    /// wrap both here.
    pub fn from_op(data: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                grad_fn: Some(grad_fn),
            })),
        }
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.node.borrow().data
    }

    /// Overwrites the forward value in place.
    ///
    /// Meant for the single owner that updates parameters between backward passes
    /// (an optimizer, or persistence restoring saved values). Nodes already derived from
    /// this one keep their old forward values; re-run the forward pass afterwards.
    pub fn set_data(&self, data: f64) {
        self.node.borrow_mut().data = data;
    }

    /// Returns the gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.node.borrow().grad
    }

    /// Returns the operation that produced this node, `OpKind::Leaf` for leaves.
    pub fn op_kind(&self) -> OpKind {
        self.node
            .borrow()
            .grad_fn
            .as_ref()
            .map_or(OpKind::Leaf, |op| op.kind())
    }

    /// Returns the backward closure of this node, if any.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.node.borrow().grad_fn.clone()
    }

    /// Returns handles to the nodes this one was derived from (empty for leaves).
    pub fn operands(&self) -> Vec<Value> {
        // Clone the Rc first so `inputs()` runs without holding our borrow.
        let grad_fn = self.grad_fn();
        grad_fn.map_or_else(Vec::new, |op| op.inputs())
    }

    /// Returns `true` if the node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.node.borrow().grad_fn.is_none()
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    #[cfg(test)]
    pub(crate) fn replace_grad_fn(&self, grad_fn: Option<Rc<dyn BackwardOp>>) {
        self.node.borrow_mut().grad_fn = grad_fn;
    }
}

impl AsRef<Value> for Value {
    fn as_ref(&self) -> &Value {
        self
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

// Does not recurse into operands: large graphs would print exponentially.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.node.borrow();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field(
                "op",
                &guard.grad_fn.as_ref().map_or(OpKind::Leaf, |op| op.kind()),
            )
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(data={:.4}, grad={:.4}, op={})",
            self.data(),
            self.grad(),
            self.op_kind()
        )
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
