// neurograd-core/src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::rc::Rc;

// --- LnBackward Definition ---

/// Backward pass structure for the natural logarithm (`ln`).
///
/// Stores the input value, needed to compute the gradient \( \frac{1}{a} \).
#[derive(Debug)]
struct LnBackward {
    input: Value,
    input_data: f64,
}

impl BackwardOp for LnBackward {
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        Ok(vec![grad_output / self.input_data])
    }

    fn kind(&self) -> OpKind {
        OpKind::Ln
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Computes the natural logarithm.
///
/// # Errors
/// `DomainError` if the input is not strictly positive.
pub fn ln_op(input: &Value) -> Result<Value, NeuroGradError> {
    let input_data = input.data();
    if input_data <= 0.0 || input_data.is_nan() {
        return Err(NeuroGradError::domain(
            "ln",
            format!("logarithm of non-positive value {}", input_data),
        ));
    }
    let backward_context = LnBackward {
        input: input.clone(),
        input_data,
    };
    Ok(Value::from_op(input_data.ln(), Rc::new(backward_context)))
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
