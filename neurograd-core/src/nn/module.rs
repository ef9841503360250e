use crate::error::NeuroGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// Result of evaluating a module.
///
/// A layer with exactly one neuron yields its single output unwrapped, any other
/// layer yields one output per neuron. Callers must not assume a uniform shape across
/// layer sizes; [`Output::into_vec`] normalises both cases.
#[derive(Debug, Clone)]
pub enum Output {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl Output {
    /// Flattens the output into a list of nodes (one element for `Scalar`).
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Scalar(v) => vec![v],
            Output::Vector(vs) => vs,
        }
    }

    /// Returns the node of a `Scalar` output.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Output::Scalar(v) => Some(v),
            Output::Vector(_) => None,
        }
    }

    /// Consumes a `Scalar` output, failing on a `Vector`.
    pub fn into_scalar(self) -> Result<Value, NeuroGradError> {
        match self {
            Output::Scalar(v) => Ok(v),
            Output::Vector(vs) => Err(NeuroGradError::DimensionMismatch {
                expected: 1,
                actual: vs.len(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(vs) => vs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward values, in output order.
    pub fn data(&self) -> Vec<f64> {
        match self {
            Output::Scalar(v) => vec![v.data()],
            Output::Vector(vs) => vs.iter().map(Value::data).collect(),
        }
    }
}

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// This trait defines the operations any module supports: a forward pass that builds
/// the computation graph, and access to its learnable parameters.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs` does not have the width the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Output, NeuroGradError>;

    /// Returns all learnable parameters of the module, including those of sub-modules.
    ///
    /// The order is stable: layer by layer, neuron by neuron, weights in input order
    /// then bias. Persistence and optimizers rely on it.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `layers.0.neurons.1.w.0`), in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Performs a forward pass on raw numbers, each wrapped in a fresh leaf.
    fn forward_numeric(&self, inputs: &[f64]) -> Result<Output, NeuroGradError> {
        let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward(&leaves)
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
