use crate::error::ScalogradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity: the pre-activation is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(&self, pre_activation: &Value) -> Value {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Relu => pre_activation.relu(),
            Activation::Linear => pre_activation.clone(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "linear" | "identity" => Ok(Activation::Linear),
            _ => Err(ScalogradError::ConfigurationError(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "Tanh",
            Activation::Relu => "ReLU",
            Activation::Linear => "Linear",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_activation_apply() {
        let x = Value::new(-0.5);
        assert_relative_eq!(Activation::Tanh.apply(&x).data(), (-0.5_f64).tanh(), epsilon = 1e-12);
        assert_eq!(Activation::Relu.apply(&x).data(), 0.0);
        let same = Activation::Linear.apply(&x);
        assert_eq!(same, x);
    }

    #[test]
    fn test_activation_parse() {
        assert_eq!("TANH".parse::<Activation>().unwrap(), Activation::Tanh);
        assert_eq!("relu".parse::<Activation>().unwrap(), Activation::Relu);
        assert_eq!("identity".parse::<Activation>().unwrap(), Activation::Linear);
        assert!(matches!(
            "sigmoid".parse::<Activation>(),
            Err(ScalogradError::ConfigurationError(_))
        ));
        assert_eq!(Activation::default(), Activation::Tanh);
    }
}
