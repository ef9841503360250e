// src/nn/layers/mod.rs

//! Building blocks of a feed-forward network: the per-neuron [`Activation`], the
//! [`Neuron`] itself, and the fully connected [`Layer`].

pub mod activation;
pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use activation::Activation;
pub use layer::Layer;
pub use neuron::Neuron;
