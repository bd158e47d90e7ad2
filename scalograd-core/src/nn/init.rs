//! Parameter initialization.
//!
//! Networks draw every weight and bias from one seeded generator, in construction order,
//! so a seed fully determines the initial parameters.

use crate::error::ScalogradError;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Default bounds of the initialization range, `[-1, 1)`.
pub const DEFAULT_LOW: f64 = -1.0;
pub const DEFAULT_HIGH: f64 = 1.0;

/// Creates the reproducible generator networks are built from.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn uniform_distribution(low: f64, high: f64) -> Result<Uniform<f64>, ScalogradError> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(ScalogradError::ConfigurationError(format!(
            "uniform init needs finite bounds with low < high, got [{}, {})",
            low, high
        )));
    }
    Ok(Uniform::new(low, high))
}

/// Draws one leaf uniformly from `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
) -> Result<Value, ScalogradError> {
    let dist = uniform_distribution(low, high)?;
    Ok(Value::new(dist.sample(rng)))
}

/// Draws `n` leaves uniformly from `[low, high)`, in order.
pub fn uniform_vec<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Result<Vec<Value>, ScalogradError> {
    let dist = uniform_distribution(low, high)?;
    Ok((0..n).map(|_| Value::new(dist.sample(rng))).collect())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
