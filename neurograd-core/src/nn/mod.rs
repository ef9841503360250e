// src/nn/mod.rs

//! Neural-network layer built on the scalar engine: parameters, the [`Module`] trait,
//! neurons and layers, losses, random initialization and parameter persistence.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;
pub mod persistence;

// Re-export common items
pub use init::Initializer;
pub use layers::{Activation, Layer, Neuron};
pub use losses::MSELoss;
pub use module::{Module, Output};
pub use parameter::Parameter;
pub use persistence::LoadOutcome;
