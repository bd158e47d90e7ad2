use super::*;
use crate::autograd::grad_check::check_grad;

#[test]
fn test_sub_ok() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    assert_eq!(sub_op(&a, &b).data(), 1.0);
    assert_eq!((&a - &b).data(), 1.0);
    assert_eq!((&a - 2.0).data(), 1.0);
}

#[test]
fn test_sub_scalar_on_the_left_is_not_swapped() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    assert_eq!((5.0 - &a).data(), 2.0);
    assert_eq!((5.0 - &b).data(), 3.0);
    assert_eq!(rsub_scalar_op(5.0, &b).data(), 3.0);
}

#[test]
fn test_sub_backward() {
    let a = Value::new(3.0);
    let b = Value::new(2.0);
    let c = sub_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_rsub_backward() {
    let a = Value::new(3.0);
    let c = 5.0 - &a;
    c.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_sub_backward_grad_check() {
    let func = |v: &[Value]| Ok(&(&v[0] - &v[1]) * &v[0]);
    check_grad(func, &[1.5, -0.5], 1e-6, 1e-7, 1e-5).unwrap();
}
