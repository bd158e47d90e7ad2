//! Batches the reference toy dataset with a `SequentialSampler` and a seeded
//! `RandomSampler`, then trains the reference network from full-batch loader passes.
//!
//! `RUST_LOG=info cargo run -p scalograd-data --example data_loading_example`

use scalograd_core::train::Trainer;
use scalograd_core::{ScalogradError, TrainConfig};
use scalograd_data::{reference_dataset, DataLoader, RandomSampler, SequentialSampler};

fn main() -> Result<(), ScalogradError> {
    env_logger::init();

    println!("--- SequentialSampler, batch size 2 ---");
    let loader = DataLoader::new(reference_dataset(), 2, SequentialSampler::new(), false, None)?;
    for (i, batch) in loader.enumerate() {
        println!("batch {i}: {:?}", batch?);
    }

    println!("\n--- RandomSampler (seed 7), batch size 3 ---");
    let loader = DataLoader::new(
        reference_dataset(),
        3,
        RandomSampler::with_seed(false, None, 7),
        false,
        None,
    )?;
    for (i, batch) in loader.enumerate() {
        println!("batch {i}: {:?}", batch?);
    }

    println!("\n--- Full-batch training ---");
    let config = TrainConfig::from_env()?;
    let mut trainer = Trainer::from_config(&config)?;
    let mut loader = DataLoader::full_batch(reference_dataset(), SequentialSampler::new())?;
    for epoch in 0..config.epochs {
        loader.reset();
        for batch in loader.by_ref() {
            let (xs, ys): (Vec<Vec<f64>>, Vec<f64>) = batch?.into_iter().unzip();
            let loss = trainer.train_step(&xs, &ys)?;
            println!("epoch {epoch:>3}  loss {loss:.6}");
        }
    }
    Ok(())
}
