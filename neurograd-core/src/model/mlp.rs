use crate::error::NeuroGradError;
use crate::nn::init::Initializer;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::{Module, Output};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A multilayer perceptron: fully connected layers chained feed-forward.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network reading `n_inputs` values, with one layer per entry of
    /// `layer_sizes`. Every neuron uses tanh and draws its parameters uniformly from
    /// `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_config(
            n_inputs,
            layer_sizes,
            Activation::default(),
            &Initializer::default(),
            rng,
        )
    }

    /// Same as [`Mlp::new`] with an explicit activation and initializer.
    ///
    /// # Errors
    /// `InvalidConfig` if `n_inputs` is zero, `layer_sizes` is empty or contains a zero,
    /// or `init` is invalid.
    pub fn with_config<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        activation: Activation,
        init: &Initializer,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if n_inputs == 0 {
            return Err(NeuroGradError::InvalidConfig(
                "an MLP needs at least one input".to_string(),
            ));
        }
        if layer_sizes.is_empty() {
            return Err(NeuroGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        init.validate()?;

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::new(width, size, activation, init, rng)?);
            width = size;
        }
        let mlp = Self::from_layers(layers)?;
        debug!(
            "Built MLP {}-{:?} ({}) with {} parameters",
            n_inputs,
            layer_sizes,
            activation,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Assembles a network from existing layers.
    ///
    /// # Errors
    /// `InvalidConfig` if `layers` is empty or a layer's input width differs from the
    /// previous layer's output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NeuroGradError> {
        if layers.is_empty() {
            return Err(NeuroGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[1].n_inputs() != pair[0].n_outputs() {
                return Err(NeuroGradError::InvalidConfig(format!(
                    "layer {} reads {} inputs but layer {} produces {}",
                    i + 1,
                    pair[1].n_inputs(),
                    i,
                    pair[0].n_outputs()
                )));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }
}

impl Module for Mlp {
    /// Feeds `inputs` through every layer in order.
    ///
    /// The result has the shape of the last layer's output: a scalar for a single
    /// output neuron, a vector otherwise.
    fn forward(&self, inputs: &[Value]) -> Result<Output, NeuroGradError> {
        let (last, hidden) = self
            .layers
            .split_last()
            .ok_or_else(|| NeuroGradError::InternalError("MLP without layers".to_string()))?;
        let mut current = inputs.to_vec();
        for layer in hidden {
            current = layer.forward(&current)?.into_vec();
        }
        last.forward(&current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
