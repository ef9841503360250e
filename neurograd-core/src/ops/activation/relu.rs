use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
    input_data: f64,
}

impl BackwardOp for ReluBackward {
    fn kind(&self) -> OpKind {
        OpKind::Relu
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        // grad = upstream_grad * (input > 0); the subgradient at 0 is taken as 0.
        let mask = if self.input_data > 0.0 { 1.0 } else { 0.0 };
        Ok(vec![grad_output * mask])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, x)`.
pub fn relu_op(input: &Value) -> Value {
    let input_data = input.data();
    let backward_context = ReluBackward {
        input: input.clone(),
        input_data,
    };
    Value::from_op(input_data.max(0.0), Rc::new(backward_context))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
