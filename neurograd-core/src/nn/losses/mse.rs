// neurograd-core/src/nn/losses/mse.rs

use crate::error::NeuroGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NeuroGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss is built from graph operations, so calling `backward()` on it propagates
/// into the predictions and, through them, into the network's parameters.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `Σ (p_i - t_i)^2`, divided by the number of pairs for `Reduction::Mean`.
    ///
    /// # Errors
    /// * `DimensionMismatch` if the slices have different lengths.
    /// * `InvalidConfig` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, NeuroGradError> {
        if predictions.len() != targets.len() {
            return Err(NeuroGradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }
        if predictions.is_empty() {
            return Err(NeuroGradError::InvalidConfig(
                "MSE loss needs at least one prediction".to_string(),
            ));
        }

        let mut total: Option<Value> = None;
        for (p, &t) in predictions.iter().zip(targets) {
            let diff = p - t;
            let sq = &diff * &diff;
            total = Some(match total {
                Some(acc) => acc + sq,
                None => sq,
            });
        }
        let total = total.ok_or_else(|| {
            NeuroGradError::InternalError("MSE loss accumulated no terms".to_string())
        })?;

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
