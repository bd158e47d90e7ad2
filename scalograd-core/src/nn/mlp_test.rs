use super::*;
use crate::nn::init::seeded_rng;
use approx::assert_relative_eq;

fn reference_mlp(seed: u64) -> Mlp {
    Mlp::new(3, &[4, 4, 1], &mut seeded_rng(seed)).unwrap()
}

#[test]
fn test_mlp_shapes() {
    let mlp = reference_mlp(1337);
    assert_eq!(mlp.nin(), 3);
    assert_eq!(mlp.nout(), 1);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.num_parameters(), 4 * 4 + 4 * 5 + 5);
    assert!(mlp.to_string().starts_with("MLP of [Layer of [TanhNeuron(3)"));
}

#[test]
fn test_mlp_same_seed_same_network() {
    let a = reference_mlp(5);
    let b = reference_mlp(5);
    let pa: Vec<f64> = a.parameters().iter().map(Value::data).collect();
    let pb: Vec<f64> = b.parameters().iter().map(Value::data).collect();
    assert_eq!(pa, pb);
    assert_eq!(
        a.predict(&[2.0, 3.0, -1.0]).unwrap(),
        b.predict(&[2.0, 3.0, -1.0]).unwrap()
    );
}

#[test]
fn test_mlp_rejects_empty_sizes() {
    let err = Mlp::new(3, &[], &mut seeded_rng(0)).unwrap_err();
    assert!(matches!(err, ScalogradError::ConfigurationError(_)));
    assert!(Mlp::new(3, &[4, 0, 1], &mut seeded_rng(0)).is_err());
}

#[test]
fn test_mlp_forward_scalar() -> Result<(), ScalogradError> {
    let mlp = reference_mlp(1337);
    let out = mlp.forward_scalar(&Value::from_slice(&[2.0, 3.0, -1.0]))?;
    assert!(out.data() > -1.0 && out.data() < 1.0);

    let wide = Mlp::new(3, &[2], &mut seeded_rng(0))?;
    assert!(matches!(
        wide.forward_scalar(&Value::from_slice(&[2.0, 3.0, -1.0])),
        Err(ScalogradError::DimensionMismatch { expected: 1, actual: 2, .. })
    ));
    assert!(mlp.forward(&Value::from_slice(&[1.0])).is_err());
    Ok(())
}

#[test]
fn test_mlp_from_weights() -> Result<(), ScalogradError> {
    // 2 -> 2 -> 1, linear everywhere
    let mlp = Mlp::from_weights(
        &[
            vec![(vec![1.0, 0.0], 0.0), (vec![0.0, 1.0], 1.0)],
            vec![(vec![2.0, -1.0], 0.5)],
        ],
        Activation::Linear,
    )?;
    let y = mlp.predict(&[3.0, 4.0])?;
    // hidden = [3, 5]; out = 0.5 + 6 - 5
    assert_relative_eq!(y[0], 1.5, epsilon = 1e-12);

    let names: Vec<String> = mlp
        .named_parameters()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names.first().map(String::as_str), Some("layer0.neuron0.weight0"));
    assert_eq!(names.last().map(String::as_str), Some("layer1.neuron0.bias"));
    Ok(())
}

#[test]
fn test_mlp_from_weights_width_mismatch() {
    let err = Mlp::from_weights(
        &[
            vec![(vec![1.0, 0.0], 0.0)],
            vec![(vec![2.0, -1.0], 0.5)],
        ],
        Activation::Tanh,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScalogradError::DimensionMismatch { expected: 1, actual: 2, .. }
    ));
}

#[test]
fn test_mlp_backward_fills_every_parameter() -> Result<(), ScalogradError> {
    let mlp = reference_mlp(1337);
    let out = mlp.forward_scalar(&Value::from_slice(&[2.0, 3.0, -1.0]))?;
    out.backward();
    assert!(mlp.parameters().iter().all(|p| p.grad().is_finite()));
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));
    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}
