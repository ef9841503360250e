use crate::error::NeuroGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b` as `a * b^-1`.
///
/// # Errors
/// `DomainError` if `b` is zero (raised by `pow_op`).
pub fn div_op(a: &Value, b: &Value) -> Result<Value, NeuroGradError> {
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
