use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::OpKind;
use crate::value::Value;
use std::rc::Rc;

// --- TanhBackward Definition ---

/// Backward pass structure for the hyperbolic tangent.
///
/// Stores the node's own forward output `t`, since \( \frac{d}{dx}\tanh(x) = 1 - t^2 \).
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output_data: f64,
}

impl BackwardOp for TanhBackward {
    fn kind(&self) -> OpKind {
        OpKind::Tanh
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        let t = self.output_data;
        Ok(vec![grad_output * (1.0 - t * t)])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Applies the hyperbolic tangent.
///
/// Uses `f64::tanh`, which stays finite for any input (the closed form
/// `(e^2x - 1)/(e^2x + 1)` overflows to NaN past `x ≈ 355`). The result lies in
/// (-1, 1), saturating to exactly ±1 in `f64` once |x| exceeds roughly 19.1.
pub fn tanh_op(input: &Value) -> Value {
    let output_data = input.data().tanh();
    let backward_context = TanhBackward {
        input: input.clone(),
        output_data,
    };
    Value::from_op(output_data, Rc::new(backward_context))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
