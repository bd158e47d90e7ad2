use super::*;
use approx::assert_relative_eq;

fn toy_data() -> (Vec<Vec<f64>>, Vec<f64>) {
    (
        vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )
}

#[test]
fn test_from_config_builds_reference_network() -> Result<(), ScalogradError> {
    let trainer = Trainer::from_config(&TrainConfig::default())?;
    assert_eq!(trainer.model().num_parameters(), 41);
    assert_eq!(trainer.optimizer().lr(), 0.5);
    assert_eq!(trainer.optimizer().params().len(), 41);
    Ok(())
}

#[test]
fn test_from_config_rejects_invalid() {
    let cfg = TrainConfig {
        layer_sizes: Vec::new(),
        ..TrainConfig::default()
    };
    assert!(matches!(
        Trainer::from_config(&cfg),
        Err(ScalogradError::ConfigurationError(_))
    ));
}

#[test]
fn test_train_step_updates_and_clears_gradients() -> Result<(), ScalogradError> {
    let (xs, ys) = toy_data();
    let mut trainer = Trainer::from_config(&TrainConfig::default())?;
    let before: Vec<f64> = trainer.model().parameters().iter().map(Value::data).collect();

    let loss = trainer.train_step(&xs, &ys)?;
    assert!(loss.is_finite() && loss > 0.0);

    let params = trainer.model().parameters();
    assert!(params.iter().all(|p| p.grad() == 0.0));
    assert!(params.iter().zip(&before).any(|(p, b)| p.data() != *b));
    Ok(())
}

#[test]
fn test_train_step_loss_matches_manual_computation() -> Result<(), ScalogradError> {
    let (xs, ys) = toy_data();
    let mut trainer = Trainer::from_config(&TrainConfig::default())?;
    let preds: Vec<f64> = xs
        .iter()
        .map(|x| trainer.model().predict(x).map(|p| p[0]))
        .collect::<Result<_, _>>()?;
    let expected =
        preds.iter().zip(&ys).map(|(p, y)| (y - p).powi(2)).sum::<f64>() / ys.len() as f64;
    let loss = trainer.train_step(&xs, &ys)?;
    assert_relative_eq!(loss, expected, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_train_step_rejects_mismatched_batch() -> Result<(), ScalogradError> {
    let (xs, _) = toy_data();
    let mut trainer = Trainer::from_config(&TrainConfig::default())?;
    assert!(matches!(
        trainer.train_step(&xs, &[1.0]),
        Err(ScalogradError::LengthMismatch { left: 4, right: 1, .. })
    ));
    assert!(matches!(
        trainer.train_step(&[], &[]),
        Err(ScalogradError::EmptyInput(_))
    ));
    Ok(())
}

#[test]
fn test_fit_report() -> Result<(), ScalogradError> {
    let (xs, ys) = toy_data();
    let mut trainer = Trainer::from_config(&TrainConfig::default())?;
    let report = trainer.fit(&xs, &ys)?;
    assert_eq!(report.losses.len(), 10);
    assert_eq!(report.predictions.len(), 4);
    assert!(report.final_loss().is_some_and(|l| l < report.losses[0]));
    Ok(())
}

#[test]
fn test_zero_epochs() -> Result<(), ScalogradError> {
    let (xs, ys) = toy_data();
    let cfg = TrainConfig {
        epochs: 0,
        ..TrainConfig::default()
    };
    let report = Trainer::from_config(&cfg)?.fit(&xs, &ys)?;
    assert!(report.losses.is_empty());
    assert_eq!(report.final_loss(), None);
    Ok(())
}
