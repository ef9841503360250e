use crate::error::NeuroGradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Distribution used to draw the initial value of every weight and bias.
///
/// Sampling always goes through an explicitly passed generator: seed it
/// (`StdRng::seed_from_u64`) to build reproducible networks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
    /// Every parameter set to the same value.
    Constant(f64),
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Initializer {
    /// Checks the distribution parameters.
    ///
    /// # Errors
    /// `InvalidConfig` for non-finite bounds, `low >= high`, or a negative / non-finite
    /// standard deviation.
    pub fn validate(&self) -> Result<(), NeuroGradError> {
        match *self {
            Initializer::Uniform { low, high } => {
                if !(high - low).is_finite() || low >= high {
                    return Err(NeuroGradError::InvalidConfig(format!(
                        "uniform initializer needs finite bounds with low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Initializer::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(NeuroGradError::InvalidConfig(format!(
                        "normal initializer needs a finite mean and std_dev >= 0, got mean={} std_dev={}",
                        mean, std_dev
                    )));
                }
            }
            Initializer::Constant(value) => {
                if !value.is_finite() {
                    return Err(NeuroGradError::InvalidConfig(format!(
                        "constant initializer needs a finite value, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, NeuroGradError> {
        self.validate()?;
        let values = match *self {
            Initializer::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Initializer::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev)
                    .map_err(|e| NeuroGradError::InvalidConfig(e.to_string()))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Initializer::Constant(value) => vec![value; n],
        };
        Ok(values)
    }

    /// Draws a single value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, NeuroGradError> {
        let mut values = self.sample_n(1, rng)?;
        values
            .pop()
            .ok_or_else(|| NeuroGradError::InternalError("initializer drew no value".to_string()))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
