//! The reference training loop: forward every sample, one scalar loss, one backward pass,
//! one optimizer step, then clear the gradients.

pub mod trainer;

pub use trainer::{TrainReport, Trainer};
