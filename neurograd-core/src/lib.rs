//! # neurograd-core
//!
//! A scalar reverse-mode automatic differentiation engine and the small neural-network
//! layer built on top of it.
//!
//! - [`value`]: [`Value`], the graph node, with its operators and `backward()`.
//! - [`ops`]: the registry of differentiable elementary operations.
//! - [`autograd`]: backward rules, graph ordering and gradient checking.
//! - [`nn`]: parameters, neurons, layers, losses, initialization and persistence.
//! - [`model`]: the multilayer perceptron.
//! - [`optim`]: optimizers updating parameters from their gradients.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;

pub use error::NeuroGradError;
pub use ops::{OpKind, Operand};
pub use value::Value;
