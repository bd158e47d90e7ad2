//! Training configuration, with overrides read from `SCALOGRAD_*` environment variables.
//!
//! Unset variables fall back to [`TrainConfig::default`], which is the reference run:
//! seed 1337, a 3 → 4 → 4 → 1 network, learning rate 0.5, 10 epochs.

use crate::error::ScalogradError;
use std::env::VarError;

pub const ENV_PREFIX: &str = "SCALOGRAD_";
pub const ENV_SEED: &str = "SEED";
pub const ENV_NIN: &str = "NIN";
pub const ENV_LAYER_SIZES: &str = "LAYER_SIZES";
pub const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub const ENV_EPOCHS: &str = "EPOCHS";
pub const ENV_LOG_EVERY: &str = "LOG_EVERY";

/// Hyperparameters of one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Seed of the generator the network is initialized from.
    pub seed: u64,
    /// Number of input features.
    pub nin: usize,
    /// Width of each layer, output layer last.
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Log the loss every N epochs (0 disables per-epoch logging).
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            nin: 3,
            layer_sizes: vec![4, 4, 1],
            learning_rate: 0.5,
            epochs: 10,
            log_every: 1,
        }
    }
}

impl TrainConfig {
    /// Checks that the configuration describes a buildable network and a usable optimizer.
    pub fn validate(&self) -> Result<(), ScalogradError> {
        if self.nin == 0 {
            return Err(ScalogradError::ConfigurationError(
                "nin must be at least 1".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalogradError::ConfigurationError(
                "layer_sizes must name at least one layer".to_string(),
            ));
        }
        if let Some(i) = self.layer_sizes.iter().position(|&n| n == 0) {
            return Err(ScalogradError::ConfigurationError(format!(
                "layer_sizes[{}] is zero",
                i
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(ScalogradError::ConfigurationError(format!(
                "learning_rate must be finite and >= 0, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    /// `ConfigParse` if a set variable does not parse. The result is not validated.
    pub fn from_env() -> Result<Self, ScalogradError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Same as [`TrainConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScalogradError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let default = Self::default();
        let seed = env_parsed(&lookup, ENV_SEED)?.unwrap_or(default.seed);
        let nin = env_parsed(&lookup, ENV_NIN)?.unwrap_or(default.nin);
        let layer_sizes = match env_string(&lookup, ENV_LAYER_SIZES)? {
            Some(raw) => parse_layer_sizes(&env_key(ENV_LAYER_SIZES), &raw)?,
            None => default.layer_sizes,
        };
        let learning_rate =
            env_parsed(&lookup, ENV_LEARNING_RATE)?.unwrap_or(default.learning_rate);
        let epochs = env_parsed(&lookup, ENV_EPOCHS)?.unwrap_or(default.epochs);
        let log_every = env_parsed(&lookup, ENV_LOG_EVERY)?.unwrap_or(default.log_every);

        Ok(Self {
            seed,
            nin,
            layer_sizes,
            learning_rate,
            epochs,
            log_every,
        })
    }
}

/// Full variable name for a suffix (`SEED` → `SCALOGRAD_SEED`).
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

fn env_string<F>(lookup: &F, suffix: &str) -> Result<Option<String>, ScalogradError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let key = env_key(suffix);
    match lookup(&key) {
        Ok(s) => Ok(Some(s)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(ScalogradError::ConfigParse {
            key,
            value: String::new(),
            message: e.to_string(),
        }),
    }
}

fn env_parsed<T, F>(lookup: &F, suffix: &str) -> Result<Option<T>, ScalogradError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<String, VarError>,
{
    let Some(raw) = env_string(lookup, suffix)? else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ScalogradError::ConfigParse {
            key: env_key(suffix),
            value: raw.clone(),
            message: e.to_string(),
        })
}

/// Parses a comma-separated list of widths, e.g. `"4,4,1"`.
fn parse_layer_sizes(key: &str, raw: &str) -> Result<Vec<usize>, ScalogradError> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| ScalogradError::ConfigParse {
                    key: key.to_string(),
                    value: raw.to_string(),
                    message: e.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
