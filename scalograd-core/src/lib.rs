//! # scalograd-core
//!
//! A reverse-mode automatic differentiation engine over scalar values, with a small
//! neural network library on top.
//!
//! - [`value`]: the graph node type, [`Value`], with operator overloads.
//! - [`ops`]: forward computations and the backward rule each one records.
//! - [`autograd`]: topological ordering, the backward driver and a finite-difference
//!   gradient checker.
//! - [`nn`], [`optim`], [`train`]: neurons, layers, MLPs, MSE loss, SGD and the training
//!   loop, configured through [`config`].

pub mod autograd;
pub mod config;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;
pub mod value;
pub mod value_data;

pub use config::TrainConfig;
pub use error::ScalogradError;
pub use value::Value;

// Re-export traits required by public functions
pub use num_traits;
