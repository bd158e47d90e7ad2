use super::*;

#[test]
fn test_uniform_within_bounds() {
    let mut rng = seeded_rng(0);
    let values = uniform_vec(&mut rng, 1000, DEFAULT_LOW, DEFAULT_HIGH).unwrap();
    assert_eq!(values.len(), 1000);
    assert!(values
        .iter()
        .all(|v| v.data() >= -1.0 && v.data() < 1.0 && v.is_leaf()));
}

#[test]
fn test_same_seed_same_draws() {
    let a = uniform_vec(&mut seeded_rng(42), 8, -1.0, 1.0).unwrap();
    let b = uniform_vec(&mut seeded_rng(42), 8, -1.0, 1.0).unwrap();
    let c = uniform_vec(&mut seeded_rng(43), 8, -1.0, 1.0).unwrap();
    let data = |vs: &[Value]| vs.iter().map(Value::data).collect::<Vec<_>>();
    assert_eq!(data(&a), data(&b));
    assert_ne!(data(&a), data(&c));
}

#[test]
fn test_single_draw_matches_vec_draw() {
    let single = uniform(&mut seeded_rng(7), -0.5, 0.5).unwrap();
    let many = uniform_vec(&mut seeded_rng(7), 1, -0.5, 0.5).unwrap();
    assert_eq!(single.data(), many[0].data());
}

#[test]
fn test_invalid_bounds() {
    let mut rng = seeded_rng(0);
    assert!(matches!(
        uniform(&mut rng, 1.0, 1.0),
        Err(ScalogradError::ConfigurationError(_))
    ));
    assert!(uniform(&mut rng, 1.0, -1.0).is_err());
    assert!(uniform_vec(&mut rng, 3, f64::NAN, 1.0).is_err());
}
