use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::rc::Rc;

/// Backward pass structure for `exp`. The derivative is the node's own output.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for ExpBackward {
    fn kind(&self) -> OpKind {
        OpKind::Exp
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        Ok(vec![grad_output * self.output_data])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

/// Computes `e^x`.
pub fn exp_op(input: &Value) -> Value {
    let output_data = input.data().exp();
    let backward_context = ExpBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(backward_context))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
