// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activation functions applied by neurons.
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: hyperbolic tangent, the default neuron activation.
//! - [`relu_op`]: Rectified Linear Unit.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
