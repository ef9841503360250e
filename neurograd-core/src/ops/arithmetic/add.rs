// neurograd-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::ops::OpKind;
use crate::value::Value;
use crate::error::NeuroGradError;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    fn kind(&self) -> OpKind {
        OpKind::Add
    }

    // d(a + b)/da = d(a + b)/db = 1
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two nodes, recording both as operands of the result.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    let backward_context = AddBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Value::from_op(data, std::rc::Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
