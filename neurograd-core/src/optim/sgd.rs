use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Implements the Stochastic Gradient Descent (SGD) optimizer, with optional momentum.
///
/// With momentum `μ`, each parameter keeps a velocity `v`:
/// `v = μ * v + grad`, then `p = p - lr * v`. With `μ = 0` this is `p = p - lr * grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    velocities: Vec<f64>,
}

impl Sgd {
    /// Creates a new `Sgd` over `params`.
    ///
    /// The optimizer keeps its own handles to the parameters; updates are visible
    /// through the module that owns them.
    ///
    /// # Errors
    /// `InvalidConfig` unless `lr` is finite and positive and `momentum` is in `[0, 1)`.
    pub fn new<'a>(
        params: impl IntoIterator<Item = &'a Parameter>,
        lr: f64,
        momentum: f64,
    ) -> Result<Self, NeuroGradError> {
        validate_lr(lr)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(NeuroGradError::InvalidConfig(format!(
                "SGD momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        let params: Vec<Parameter> = params.into_iter().cloned().collect();
        let velocities = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            lr,
            momentum,
            velocities,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), NeuroGradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

fn validate_lr(lr: f64) -> Result<(), NeuroGradError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(NeuroGradError::InvalidConfig(format!(
            "SGD learning rate must be finite and positive, got {}",
            lr
        )));
    }
    Ok(())
}

impl Optimizer for Sgd {
    /// # Errors
    /// `DomainError` if any gradient is NaN or infinite. No parameter is updated then.
    fn step(&mut self) -> Result<(), NeuroGradError> {
        let grads: Vec<f64> = self.params.iter().map(|p| p.grad()).collect();
        if let Some(i) = grads.iter().position(|g| !g.is_finite()) {
            return Err(NeuroGradError::domain(
                "sgd_step",
                format!("gradient of parameter {} is not finite ({})", i, grads[i]),
            ));
        }

        for ((param, velocity), grad) in self
            .params
            .iter()
            .zip(self.velocities.iter_mut())
            .zip(grads)
        {
            *velocity = self.momentum * *velocity + grad;
            param.set_data(param.data() - self.lr * *velocity);
        }
        debug!(
            "SGD step over {} parameters (lr={}, momentum={})",
            self.params.len(),
            self.lr,
            self.momentum
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
