use crate::error::NeuroGradError;
use crate::nn::init::Initializer;
use crate::nn::layers::Activation;
use crate::nn::module::{Module, Output};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `activation(bias + Σ w_i * x_i)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights and a bias, all drawn from `init`.
    ///
    /// Weights are drawn first, in input order, then the bias.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let mut values = init.sample_n(n_inputs + 1, rng)?;
        let bias = values.pop().ok_or_else(|| {
            NeuroGradError::InternalError("initializer drew no bias value".to_string())
        })?;
        Ok(Self::from_weights(&values, bias, activation))
    }

    /// Creates a neuron with explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Parameter::new(w)).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Evaluates the neuron on `inputs`, building its part of the graph.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from the number of weights.
    pub fn evaluate(&self, inputs: &[Value]) -> Result<Value, NeuroGradError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut act = self.bias.value().clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = &act + &(w.value() * x);
        }
        Ok(self.activation.apply(&act))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Output, NeuroGradError> {
        self.evaluate(inputs).map(Output::Scalar)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params: Vec<(String, &Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w))
            .collect();
        params.push(("b".to_string(), &self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
