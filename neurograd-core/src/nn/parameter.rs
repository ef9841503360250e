use crate::error::NeuroGradError;
use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] marking it as a learnable parameter of a Module.
///
/// Cloning a `Parameter` clones the handle: both clones refer to the same node, so an
/// optimizer or a persistence call holding a clone updates the module's parameter.
#[derive(Clone)]
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new parameter as a fresh leaf holding `data`.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// Wraps an existing node. Only leaves can be parameters.
    pub fn from_value(value: Value) -> Result<Self, NeuroGradError> {
        if !value.is_leaf() {
            return Err(NeuroGradError::InvalidConfig(format!(
                "a parameter must be a leaf node, got a {} node",
                value.op_kind()
            )));
        }
        Ok(Parameter(value))
    }

    /// Returns the underlying node.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow using the parameter wherever a `&Value` is expected.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Value> for Parameter {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
