// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;

// --- Forward Operation ---

impl<T: GradScalar> Graph<T> {
    /// Raises `base` to a constant `exponent`.
    ///
    /// The exponent is a plain number, not a node: it is stored on the output
    /// node and never receives a gradient. A negative base with a fractional
    /// exponent yields NaN.
    pub fn pow(&mut self, base: NodeId, exponent: T) -> NodeId {
        self.apply_unary_op(
            base,
            |x| pow_forward(x, exponent),
            |input| Op::Pow(input, exponent),
        )
    }
}

pub fn pow_forward<T: GradScalar>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

// --- Backward Operation ---

/// d(x^k)/dx = k * x^(k-1)
pub(crate) fn pow_backward<T: GradScalar>(grad_output: T, base: T, exponent: T) -> T {
    grad_output * exponent * base.powf(exponent - T::one())
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
