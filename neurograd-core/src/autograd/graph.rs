use crate::error::NeuroGradError;
use crate::value::{NodeId, Value};
use log::trace;
use std::collections::HashSet;

/// One pending node of the depth-first traversal.
struct Frame {
    node: Value,
    operands: Vec<Value>,
    next: usize,
}

impl Frame {
    fn new(node: Value) -> Self {
        let operands = node.operands();
        Frame {
            node,
            operands,
            next: 0,
        }
    }
}

/// Builds a topological sort of the computation graph rooted at `root`.
///
/// Nodes are appended post-order: every node appears after all of its operands, so
/// iterating the result in reverse visits each node only after all of its consumers.
/// Each node appears exactly once, however many paths lead to it.
///
/// The traversal is iterative, so deep graphs (e.g. a neuron summing thousands of
/// terms) do not grow the call stack. Freeing such a graph is iterative as well, see
/// the `Drop` impl of the node storage in `value`.
///
/// # Errors
/// Returns `NeuroGradError::CyclicGraph` if an operand edge leads back to a node whose
/// subtree is still being explored.
pub(crate) fn topological_sort(root: &Value) -> Result<Vec<Value>, NeuroGradError> {
    let mut sorted: Vec<Value> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut in_progress: HashSet<NodeId> = HashSet::new();

    in_progress.insert(root.node_id());
    let mut stack = vec![Frame::new(root.clone())];

    loop {
        let next_child = match stack.last_mut() {
            None => break,
            Some(frame) if frame.next < frame.operands.len() => {
                let child = frame.operands[frame.next].clone();
                frame.next += 1;
                Some(child)
            }
            Some(_) => None,
        };

        match next_child {
            Some(child) => {
                let child_id = child.node_id();
                if visited.contains(&child_id) {
                    continue;
                }
                if !in_progress.insert(child_id) {
                    return Err(NeuroGradError::CyclicGraph);
                }
                trace!("[topological_sort] entering node {:?}", child_id);
                stack.push(Frame::new(child));
            }
            None => {
                if let Some(frame) = stack.pop() {
                    let id = frame.node.node_id();
                    in_progress.remove(&id);
                    visited.insert(id);
                    sorted.push(frame.node);
                }
            }
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
