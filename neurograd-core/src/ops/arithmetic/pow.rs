use crate::autograd::BackwardOp;
use crate::error::NeuroGradError;
use crate::ops::{OpKind, Operand};
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for `base^exponent` with a constant exponent.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    base_data: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn kind(&self) -> OpKind {
        OpKind::Pow
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, NeuroGradError> {
        // k * x^(k-1) is undefined at x == 0 for k < 1.
        if self.base_data == 0.0 && self.exponent < 1.0 {
            return Err(NeuroGradError::domain(
                "pow backward",
                format!(
                    "derivative of x^{} is undefined at x = 0",
                    self.exponent
                ),
            ));
        }
        let local_grad = self.exponent * self.base_data.powf(self.exponent - 1.0);
        Ok(vec![grad_output * local_grad])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant power.
///
/// # Errors
/// * `UnsupportedOperation` if `exponent` is a node: only constant exponents are
///   differentiable here.
/// * `DomainError` for `0` raised to a negative power, or a negative base raised to a
///   non-integer power.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, NeuroGradError> {
    let exponent = match exponent.into() {
        Operand::Constant(k) => k,
        Operand::Node(_) => {
            return Err(NeuroGradError::UnsupportedOperation(
                "pow requires a constant exponent, not a graph node".to_string(),
            ))
        }
    };

    let base_data = base.data();
    if base_data == 0.0 && exponent < 0.0 {
        return Err(NeuroGradError::domain(
            "pow",
            format!("0 raised to the negative power {}", exponent),
        ));
    }
    if base_data < 0.0 && exponent.fract() != 0.0 {
        return Err(NeuroGradError::domain(
            "pow",
            format!(
                "negative base {} raised to the non-integer power {}",
                base_data, exponent
            ),
        ));
    }

    let backward_context = PowBackward {
        base: base.clone(),
        base_data,
        exponent,
    };
    Ok(Value::from_op(
        base_data.powf(exponent),
        Rc::new(backward_context),
    ))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
