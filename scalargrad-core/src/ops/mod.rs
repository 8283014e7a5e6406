//! # Scalar Operations Module (`ops`)
//!
//! This module defines the operations that can be recorded on a
//! [`Graph`](crate::Graph). Operations are grouped into submodules by kind.
//!
//! ## Structure:
//!
//! - **Forward methods:** each operation is a method on `Graph` (e.g.
//!   `graph.mul(a, b)`) that computes the forward value and records exactly one
//!   new node tagged with the matching [`Op`] variant.
//! - **`_backward` functions:** each operation file also holds the pure local
//!   derivative rule (`add_backward`, `relu_backward`, ...). They are called by
//!   the single dispatch in [`autograd::backward_op`](crate::autograd::backward_op)
//!   during a backward pass.
//! - **Traits (`ops::traits`):** the [`GradScalar`] bound shared by all ops.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, pow.
//! - [`activation`]: relu, tanh.

pub mod traits;

use crate::autograd::Op;
use crate::graph::Graph;
use crate::node::{NodeId, Operand};
use traits::numeric::GradScalar;

pub mod activation;
pub mod arithmetic;

impl<T: GradScalar> Graph<T> {
    /// Records a unary operation on `a`.
    ///
    /// * `forward`: computes the output value from `a`'s value.
    /// * `op_builder`: builds the node's [`Op`] from the input id.
    pub(crate) fn apply_unary_op<F, B>(&mut self, a: NodeId, forward: F, op_builder: B) -> NodeId
    where
        F: FnOnce(T) -> T,
        B: FnOnce(NodeId) -> Op<T>,
    {
        let value = forward(self.value(a));
        self.push(value, op_builder(a))
    }

    /// Records a binary operation on `a` and `b`, lifting `b` first when it is
    /// a raw scalar. Inputs are only read, never mutated.
    pub(crate) fn apply_binary_op<F, B>(
        &mut self,
        a: NodeId,
        b: impl Into<Operand<T>>,
        forward: F,
        op_builder: B,
    ) -> NodeId
    where
        F: FnOnce(T, T) -> T,
        B: FnOnce(NodeId, NodeId) -> Op<T>,
    {
        let a_value = self.value(a);
        let b = self.lift(b);
        let value = forward(a_value, self.value(b));
        self.push(value, op_builder(a, b))
    }
}
