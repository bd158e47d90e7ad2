// src/nn/layers/mod.rs

pub mod activation;
pub mod layer;
pub mod neuron;

pub use activation::Activation;
pub use layer::Layer;
pub use neuron::Neuron;
