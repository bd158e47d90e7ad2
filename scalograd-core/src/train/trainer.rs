use crate::config::TrainConfig;
use crate::error::ScalogradError;
use crate::nn::init::seeded_rng;
use crate::nn::{MSELoss, Mlp, Module, Reduction};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::value::Value;
use log::{debug, info, warn};

/// Outcome of [`Trainer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Loss of every epoch, measured before that epoch's update.
    pub losses: Vec<f64>,
    /// Network output for every training sample after the last update.
    pub predictions: Vec<f64>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Couples a network, a loss and an optimizer.
#[derive(Debug)]
pub struct Trainer {
    model: Mlp,
    loss_fn: MSELoss,
    optimizer: SgdOptimizer,
    epochs: usize,
    log_every: usize,
}

impl Trainer {
    pub fn new(model: Mlp, loss_fn: MSELoss, optimizer: SgdOptimizer, epochs: usize) -> Self {
        Trainer {
            model,
            loss_fn,
            optimizer,
            epochs,
            log_every: 1,
        }
    }

    /// Builds the network, a mean-reduced MSE loss and plain SGD from `config`.
    ///
    /// # Errors
    /// Whatever [`TrainConfig::validate`] rejects.
    pub fn from_config(config: &TrainConfig) -> Result<Self, ScalogradError> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let model = Mlp::new(config.nin, &config.layer_sizes, &mut rng)?;
        let optimizer = SgdOptimizer::new(model.parameters(), config.learning_rate)?;
        debug!(
            "Trainer: {} with {} parameters, seed {}",
            model,
            model.num_parameters(),
            config.seed
        );
        Ok(Trainer {
            model,
            loss_fn: MSELoss::new(Reduction::Mean),
            optimizer,
            epochs: config.epochs,
            log_every: config.log_every,
        })
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn model(&self) -> &Mlp {
        &self.model
    }

    pub fn optimizer(&self) -> &SgdOptimizer {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut SgdOptimizer {
        &mut self.optimizer
    }

    /// Forward pass over every sample, returning one output node per sample.
    pub fn forward_all(&self, xs: &[Vec<f64>]) -> Result<Vec<Value>, ScalogradError> {
        xs.iter()
            .map(|x| self.model.forward_scalar(&Value::from_slice(x)))
            .collect()
    }

    /// Runs one iteration and returns the loss computed before the update.
    ///
    /// # Errors
    /// `LengthMismatch` if `xs` and `ys` differ in length, `EmptyInput` if they are empty,
    /// `DimensionMismatch` if a sample does not fit the network.
    pub fn train_step(&mut self, xs: &[Vec<f64>], ys: &[f64]) -> Result<f64, ScalogradError> {
        if xs.len() != ys.len() {
            return Err(ScalogradError::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
                operation: "Trainer train_step".to_string(),
            });
        }
        let predictions = self.forward_all(xs)?;
        let loss = self.loss_fn.calculate_targets(ys, &predictions)?;
        loss.backward();
        self.optimizer.step()?;
        self.optimizer.zero_grad();
        Ok(loss.data())
    }

    /// Runs the configured number of epochs over the full batch `xs`/`ys`.
    pub fn fit(&mut self, xs: &[Vec<f64>], ys: &[f64]) -> Result<TrainReport, ScalogradError> {
        let mut losses = Vec::with_capacity(self.epochs);
        for epoch in 0..self.epochs {
            let loss = self.train_step(xs, ys)?;
            if !loss.is_finite() {
                warn!("epoch {}: loss is not finite ({})", epoch, loss);
            }
            if self.log_every > 0 && (epoch % self.log_every == 0 || epoch + 1 == self.epochs) {
                info!("epoch {:>4} | loss {:.6}", epoch, loss);
            }
            losses.push(loss);
        }

        let predictions = self
            .forward_all(xs)?
            .iter()
            .map(Value::data)
            .collect();
        Ok(TrainReport {
            losses,
            predictions,
        })
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
