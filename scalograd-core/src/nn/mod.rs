// src/nn/mod.rs
//! Neural network building blocks on top of the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;

pub use layers::{Activation, Layer, Neuron};
pub use losses::{MSELoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
