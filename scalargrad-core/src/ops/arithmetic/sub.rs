// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::{NodeId, Operand};
use crate::ops::traits::numeric::GradScalar;

// --- Forward Operation ---

impl<T: GradScalar> Graph<T> {
    /// Records `a - b`. A raw scalar `b` is lifted into a leaf first.
    pub fn sub(&mut self, a: NodeId, b: impl Into<Operand<T>>) -> NodeId {
        self.apply_binary_op(a, b, sub_forward, Op::Sub)
    }
}

pub fn sub_forward<T: GradScalar>(a: T, b: T) -> T {
    a - b
}

// --- Backward Operation ---

/// d(a-b)/da = 1, d(a-b)/db = -1
pub(crate) fn sub_backward<T: GradScalar>(grad_output: T) -> (T, T) {
    (grad_output, -grad_output)
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
