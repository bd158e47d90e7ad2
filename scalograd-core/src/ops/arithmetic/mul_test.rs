use super::*;
use crate::autograd::grad_check::check_grad;
use crate::ops::activation::tanh_op;
use approx::assert_relative_eq;

#[test]
fn test_mul_values_ok() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    assert_eq!(mul_op(&a, &b).data(), 6.0);
    assert_eq!((&a * 2.0).data(), 6.0);
    assert_eq!((&a * 2.5).data(), 7.5);
    assert_eq!((2.0 * &a).data(), 6.0);
    assert_eq!((2.5 * &a).data(), 7.5);
}

#[test]
fn test_mul_backward_simple() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 2.0);
    assert_eq!(b.grad(), 3.0);
}

#[test]
fn test_mul_backward_through_tanh() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    let z = tanh_op(&mul_op(&a, &b));
    z.backward();
    let t = 6.0_f64.tanh();
    assert_relative_eq!(a.grad(), 2.0 * (1.0 - t * t), epsilon = 1e-6);
    assert_relative_eq!(b.grad(), 3.0 * (1.0 - t * t), epsilon = 1e-6);
}

#[test]
fn test_mul_same_operand_accumulates() {
    let a = Value::new(3.0);
    let b = mul_op(&a, &a);
    b.backward();
    assert_eq!(b.data(), 9.0);
    assert_eq!(a.grad(), 6.0);
}

#[test]
fn test_mul_backward_grad_check() {
    let func = |v: &[Value]| Ok(tanh_op(&mul_op(&v[0], &v[1])));
    check_grad(func, &[0.5, -1.2], 1e-6, 1e-7, 1e-5).unwrap();
}
