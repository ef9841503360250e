use crate::error::NeuroGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the optimization algorithm to every managed parameter, using the
    /// gradients accumulated by the last backward pass(es).
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `NeuroGradError` otherwise.
    fn step(&mut self) -> Result<(), NeuroGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before the backward pass of each training iteration: the engine
    /// accumulates gradients and never resets them on its own.
    fn zero_grad(&mut self);
}
