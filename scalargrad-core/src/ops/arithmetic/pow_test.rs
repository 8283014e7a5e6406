use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(2.0);
    let y = g.pow(x, 3.0);

    assert_relative_eq!(g.value(y), 8.0);
    assert_eq!(*g.op(y), Op::Pow(x, 3.0));
    assert_eq!(g.parents(y), vec![x]);
    // The exponent is not a node
    assert_eq!(g.len(), 2);
}

#[test]
fn test_pow_backward() {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(2.0);
    let y = g.pow(x, 3.0);
    g.backward(y);

    // 3 * 2^2
    assert_relative_eq!(g.grad(x), 12.0, epsilon = 1e-12);
    assert_eq!(g.grad(y), 1.0);
}

#[test]
fn test_pow_negative_exponent() {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(4.0);
    let y = g.pow(x, -1.0);
    g.backward(y);

    assert_relative_eq!(g.value(y), 0.25);
    // -1 * 4^-2
    assert_relative_eq!(g.grad(x), -0.0625, epsilon = 1e-12);
}

#[test]
fn test_pow_fractional_exponent_of_negative_base_is_nan() {
    let mut g = Graph::<f64>::new();
    let x = g.leaf(-4.0);
    let y = g.pow(x, 0.5);
    g.backward(y);

    assert!(g.value(y).is_nan());
    assert!(g.grad(x).is_nan());
}

#[test]
fn test_pow_grad_check() -> Result<(), GradCheckError> {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| g.pow(x[0], 2.5);
    check_grad(func, &[1.7], 1e-6, 1e-6, 1e-5)
}
