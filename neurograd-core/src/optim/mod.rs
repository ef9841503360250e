// neurograd-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the [`Optimizer`] trait and plain stochastic gradient descent
//! ([`Sgd`]). An optimizer reads the gradient of every parameter it manages after a
//! backward pass and writes updated values back through `Value::set_data`.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
