use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;

// --- Forward Operation ---

impl<T: GradScalar> Graph<T> {
    /// Applies the Rectified Linear Unit (ReLU) activation function.
    /// ReLU(x) = max(0, x)
    pub fn relu(&mut self, a: NodeId) -> NodeId {
        self.apply_unary_op(a, relu_forward, Op::Relu)
    }
}

pub fn relu_forward<T: GradScalar>(x: T) -> T {
    if x > T::zero() {
        x
    } else {
        T::zero()
    }
}

// --- Backward Operation ---

/// Passes the gradient through where the input was positive. An input at
/// exactly zero is treated as non-contributing.
pub(crate) fn relu_backward<T: GradScalar>(grad_output: T, input: T) -> T {
    if input <= T::zero() {
        T::zero()
    } else {
        grad_output
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
