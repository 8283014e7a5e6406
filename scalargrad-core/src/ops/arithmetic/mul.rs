// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::{NodeId, Operand};
use crate::ops::traits::numeric::GradScalar;

// --- Forward Operation ---

impl<T: GradScalar> Graph<T> {
    /// Records `a * b`. A raw scalar `b` is lifted into a leaf first.
    pub fn mul(&mut self, a: NodeId, b: impl Into<Operand<T>>) -> NodeId {
        self.apply_binary_op(a, b, mul_forward, Op::Mul)
    }
}

pub fn mul_forward<T: GradScalar>(a: T, b: T) -> T {
    a * b
}

// --- Backward Operation ---

/// Product rule: each operand receives the gradient scaled by the other
/// operand's value.
pub(crate) fn mul_backward<T: GradScalar>(grad_output: T, a: T, b: T) -> (T, T) {
    (grad_output * b, grad_output * a)
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
