// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::{NodeId, Operand};
use crate::ops::traits::numeric::GradScalar;

// --- Forward Operation ---

impl<T: GradScalar> Graph<T> {
    /// Records `a + b`. A raw scalar `b` is lifted into a leaf first.
    pub fn add(&mut self, a: NodeId, b: impl Into<Operand<T>>) -> NodeId {
        self.apply_binary_op(a, b, add_forward, Op::Add)
    }
}

pub fn add_forward<T: GradScalar>(a: T, b: T) -> T {
    a + b
}

// --- Backward Operation ---

/// `+` distributes its gradient unchanged to both operands.
pub(crate) fn add_backward<T: GradScalar>(grad_output: T) -> (T, T) {
    (grad_output, grad_output)
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
