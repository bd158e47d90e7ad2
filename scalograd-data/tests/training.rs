use approx::assert_relative_eq;
use scalograd_core::train::Trainer;
use scalograd_core::{ScalogradError, TrainConfig};
use scalograd_data::{reference_dataset, DataLoader, RandomSampler, SequentialSampler};

mod common;
use common::unzip_pass;

#[test]
fn test_full_batch_loader_matches_trainer_fit() -> Result<(), ScalogradError> {
    let config = TrainConfig::default();
    let dataset = reference_dataset();
    let (xs, ys) = dataset.clone().into_parts();
    let expected = Trainer::from_config(&config)?.fit(&xs, &ys)?;

    let mut trainer = Trainer::from_config(&config)?;
    let untrained_mse = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| trainer.model().predict(x).map(|p| (y - p[0]).powi(2)))
        .sum::<Result<f64, _>>()?
        / ys.len() as f64;
    let mut loader = DataLoader::full_batch(dataset, SequentialSampler::new())?;
    let mut losses = Vec::new();
    for _ in 0..config.epochs {
        loader.reset();
        for (bx, by) in unzip_pass(&mut loader)? {
            losses.push(trainer.train_step(&bx, &by)?);
        }
    }
    assert_relative_eq!(losses[0], untrained_mse, epsilon = 1e-12);
    assert_eq!(losses, expected.losses);
    for pair in losses.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    Ok(())
}

#[test]
fn test_mini_batch_training_with_random_sampler() -> Result<(), ScalogradError> {
    let config = TrainConfig {
        learning_rate: 0.1,
        ..TrainConfig::default()
    };
    let mut trainer = Trainer::from_config(&config)?;
    let mut loader = DataLoader::new(
        reference_dataset(),
        2,
        RandomSampler::with_seed(false, None, 11),
        false,
        None,
    )?;
    let mut steps = 0;
    for _ in 0..5 {
        loader.reset();
        for (bx, by) in unzip_pass(&mut loader)? {
            assert_eq!(bx.len(), 2);
            let loss = trainer.train_step(&bx, &by)?;
            assert!(loss.is_finite());
            steps += 1;
        }
    }
    assert_eq!(steps, 10);
    Ok(())
}
