use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::check_grads_near;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(3.0);
    let b = g.leaf(4.0);
    let c = g.mul(a, b);

    assert_relative_eq!(g.value(c), 12.0);
    assert_eq!(*g.op(c), Op::Mul(a, b));
}

#[test]
fn test_mul_backward_product_rule() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(3.0);
    let b = g.leaf(4.0);
    let c = g.mul(a, b);
    g.backward(c);

    check_grads_near(&g, &[a, b, c], &[4.0, 3.0, 1.0], 1e-12);
}

#[test]
fn test_mul_square() {
    // a * a: both contributions land on a, giving 2a
    let mut g = Graph::<f64>::new();
    let a = g.leaf(-1.5);
    let c = g.mul(a, a);
    g.backward(c);

    assert_relative_eq!(g.value(c), 2.25);
    assert_relative_eq!(g.grad(a), -3.0);
}

#[test]
fn test_mul_scalar_rhs() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(2.0);
    let c = g.mul(a, -3.0);
    g.backward(c);

    assert_eq!(g.value(c), -6.0);
    assert_eq!(g.grad(a), -3.0);
    let lifted = g.parents(c)[1];
    assert_eq!(g.grad(lifted), 2.0);
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    let func = |g: &mut Graph<f64>, x: &[NodeId]| {
        let ab = g.mul(x[0], x[1]);
        g.mul(ab, x[2])
    };
    check_grad(func, &[1.1, -0.7, 2.5], 1e-6, 1e-6, 1e-5)
}
