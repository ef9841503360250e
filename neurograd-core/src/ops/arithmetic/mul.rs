use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
    // Forward values captured at construction
    a_data: f64,
    b_data: f64,
}

impl BackwardOp for MulBackward {
    fn kind(&self) -> OpKind {
        OpKind::Mul
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        Ok(vec![grad_output * self.b_data, grad_output * self.a_data])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two nodes, recording both as operands of the result.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_data = a.data();
    let b_data = b.data();
    let backward_context = MulBackward {
        a: a.clone(),
        b: b.clone(),
        a_data,
        b_data,
    };
    Value::from_op(a_data * b_data, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
