use crate::error::NeuroGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied by a neuron to its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// No non-linearity: the weighted sum is the output.
    Identity,
}

impl Activation {
    pub fn apply(self, pre_activation: &Value) -> Value {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Relu => pre_activation.relu(),
            Activation::Identity => pre_activation.clone(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Identity => "identity",
        }
    }
}

impl FromStr for Activation {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "identity" | "linear" => Ok(Activation::Identity),
            _ => Err(NeuroGradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
