use crate::error::NeuroGradError;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{div_op, pow_op};
use crate::ops::math_elem::{exp_op, ln_op};
use crate::value::Value;

impl Value {
    /// Hyperbolic tangent. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    /// `max(0, self)`. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    /// `e^self`. See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    /// Natural logarithm. See [`ln_op`].
    pub fn ln(&self) -> Result<Value, NeuroGradError> {
        ln_op(self)
    }

    /// `self^exponent` for a constant exponent. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<Value, NeuroGradError> {
        pow_op(self, exponent)
    }

    /// `self / rhs`. Fails with `DomainError` when `rhs` is zero.
    pub fn try_div(&self, rhs: &Value) -> Result<Value, NeuroGradError> {
        div_op(self, rhs)
    }
}
