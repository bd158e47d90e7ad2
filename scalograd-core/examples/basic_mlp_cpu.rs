//! # Training a small MLP on CPU
//!
//! Builds a 3 → 4 → 4 → 1 tanh network from a seeded generator and fits it to a
//! four-sample toy dataset with full-batch gradient descent:
//! forward every sample, one mean-squared-error loss, one backward pass, one SGD step,
//! then clear the gradients.
//!
//! Hyperparameters can be overridden through `SCALOGRAD_*` variables, e.g.
//! `SCALOGRAD_EPOCHS=50 RUST_LOG=info cargo run --example basic_mlp_cpu`.

use log::info;
use scalograd_core::train::Trainer;
use scalograd_core::{ScalogradError, TrainConfig};

fn main() -> Result<(), ScalogradError> {
    env_logger::init();

    let config = TrainConfig::from_env()?;
    config.validate()?;
    info!("Configuration: {:?}", config);

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];

    let mut trainer = Trainer::from_config(&config)?;
    println!("{}", trainer.model());

    let report = trainer.fit(&xs, &ys)?;
    for (epoch, loss) in report.losses.iter().enumerate() {
        println!("epoch {:>3}  loss {:.6}", epoch, loss);
    }
    for (pred, target) in report.predictions.iter().zip(&ys) {
        println!("target {:>5.2}  prediction {:>8.5}", target, pred);
    }
    Ok(())
}
