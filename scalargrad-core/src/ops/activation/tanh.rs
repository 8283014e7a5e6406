use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;

// --- Forward Operation ---

impl<T: GradScalar> Graph<T> {
    /// Applies the hyperbolic tangent.
    ///
    /// With the default [`TanhBackward::Detached`](crate::TanhBackward) the
    /// output node has no backward rule and `a` receives no gradient through
    /// it. Graphs configured with `TanhBackward::Derivative` propagate
    /// `g * (1 - tanh(a)^2)` instead. The mode is fixed on the node when it is
    /// recorded.
    pub fn tanh(&mut self, a: NodeId) -> NodeId {
        let mode = self.config().tanh_backward;
        self.apply_unary_op(a, tanh_forward, |input| Op::Tanh(input, mode))
    }
}

pub fn tanh_forward<T: GradScalar>(x: T) -> T {
    x.tanh()
}

// --- Backward Operation ---

/// d(tanh x)/dx = 1 - tanh(x)^2, computed from the stored output value.
pub(crate) fn tanh_backward<T: GradScalar>(grad_output: T, output: T) -> T {
    grad_output * (T::one() - output * output)
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
