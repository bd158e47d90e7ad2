use approx::assert_relative_eq;
use scalograd_core::nn::init::seeded_rng;
use scalograd_core::nn::{Activation, MSELoss, Mlp, Module, Reduction};
use scalograd_core::optim::{Optimizer, SgdOptimizer};
use scalograd_core::train::Trainer;
use scalograd_core::{ScalogradError, TrainConfig, Value};

mod common;
use common::{init_logger, reference_dataset};

#[test]
fn test_reference_run_loss_never_increases() -> Result<(), ScalogradError> {
    init_logger();
    let (xs, ys) = reference_dataset();
    let mut trainer = Trainer::from_config(&TrainConfig::default())?;
    let report = trainer.fit(&xs, &ys)?;

    assert_eq!(report.losses.len(), 10);
    for pair in report.losses.windows(2) {
        assert!(
            pair[1] <= pair[0],
            "loss went up: {:?}",
            report.losses
        );
    }
    assert!(report.losses.iter().all(|l| l.is_finite()));
    assert!(report.final_loss().is_some_and(|l| l < 0.1));
    for (pred, target) in report.predictions.iter().zip(&ys) {
        assert_eq!(pred.signum(), target.signum());
    }
    Ok(())
}

#[test]
fn test_reference_run_is_reproducible() -> Result<(), ScalogradError> {
    let (xs, ys) = reference_dataset();
    let first = Trainer::from_config(&TrainConfig::default())?.fit(&xs, &ys)?;
    let second = Trainer::from_config(&TrainConfig::default())?.fit(&xs, &ys)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_manual_loop_matches_trainer() -> Result<(), ScalogradError> {
    let (xs, ys) = reference_dataset();
    let cfg = TrainConfig {
        epochs: 3,
        ..TrainConfig::default()
    };

    let mlp = Mlp::new(cfg.nin, &cfg.layer_sizes, &mut seeded_rng(cfg.seed))?;
    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), cfg.learning_rate)?;
    let mut manual = Vec::new();
    for _ in 0..cfg.epochs {
        let preds = xs
            .iter()
            .map(|x| mlp.forward_scalar(&Value::from_slice(x)))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = loss_fn.calculate_targets(&ys, &preds)?;
        loss.backward();
        optimizer.step()?;
        optimizer.zero_grad();
        manual.push(loss.data());
    }

    let report = Trainer::from_config(&cfg)?.fit(&xs, &ys)?;
    for (m, t) in manual.iter().zip(&report.losses) {
        assert_relative_eq!(*m, *t, epsilon = 1e-15);
    }
    Ok(())
}

#[test]
fn test_momentum_training_reduces_loss() -> Result<(), ScalogradError> {
    let (xs, ys) = reference_dataset();
    let mlp = Mlp::with_activation(3, &[8, 1], Activation::Tanh, &mut seeded_rng(0))?;
    let optimizer = SgdOptimizer::new(mlp.parameters(), 0.05)?.with_momentum(0.9)?;
    let mut trainer = Trainer::new(mlp, MSELoss::default(), optimizer, 50).with_log_every(10);
    let report = trainer.fit(&xs, &ys)?;
    let first = report.losses[0];
    let last = report.final_loss().unwrap_or(f64::INFINITY);
    assert!(last < 0.1 * first, "{} vs {}", last, first);
    Ok(())
}
