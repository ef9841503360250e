use crate::error::NeuroGradError;
use crate::nn::init::Initializer;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::{Module, Output};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: an ordered list of neurons sharing the same input width.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates a layer of `n_neurons` neurons, each reading `n_inputs` values.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_neurons: usize,
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let neurons = (0..n_neurons)
            .map(|_| Neuron::new(n_inputs, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_neurons(neurons)
    }

    /// Assembles a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidConfig` if `neurons` is empty or the neurons disagree on their width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NeuroGradError> {
        let n_inputs = match neurons.first() {
            Some(first) => first.n_inputs(),
            None => {
                return Err(NeuroGradError::InvalidConfig(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some((i, n)) = neurons
            .iter()
            .enumerate()
            .find(|(_, n)| n.n_inputs() != n_inputs)
        {
            return Err(NeuroGradError::InvalidConfig(format!(
                "neuron {} reads {} inputs, neuron 0 reads {}",
                i,
                n.n_inputs(),
                n_inputs
            )));
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// Evaluates every neuron on `inputs`.
    ///
    /// Returns `Output::Scalar` when the layer has exactly one neuron, otherwise
    /// `Output::Vector` with one node per neuron.
    fn forward(&self, inputs: &[Value]) -> Result<Output, NeuroGradError> {
        if inputs.len() != self.n_inputs {
            return Err(NeuroGradError::DimensionMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
            });
        }
        let mut outs = self
            .neurons
            .iter()
            .map(|n| n.evaluate(inputs))
            .collect::<Result<Vec<_>, _>>()?;
        if outs.len() == 1 {
            if let Some(single) = outs.pop() {
                return Ok(Output::Scalar(single));
            }
        }
        Ok(Output::Vector(outs))
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
