// src/node.rs

use crate::autograd::Op;
use crate::ops::traits::numeric::GradScalar;
use std::fmt;

/// Stable handle to a node stored in a [`Graph`](crate::Graph).
///
/// Handles are plain arena indices: copying one never copies the node, and two
/// nodes holding equal values are still told apart by their id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node inside its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Right-hand operand of a binary operation: an existing node or a raw scalar
/// that gets lifted into a fresh leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T> {
    Node(NodeId),
    Scalar(T),
}

impl<T> From<NodeId> for Operand<T> {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<f32> for Operand<f32> {
    fn from(value: f32) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f64> for Operand<f64> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

/// A single recorded value of the computation graph.
///
/// `value` is fixed at creation. `grad` starts at zero and is only written by
/// a backward pass (accumulation) or by `zero_grad`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    pub(crate) label: Option<String>,
}

impl<T: GradScalar> Node<T> {
    pub(crate) fn new(value: T, op: Op<T>) -> Self {
        Node {
            value,
            grad: T::zero(),
            op,
            label: None,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn grad(&self) -> T {
        self.grad
    }

    /// The operation that produced this node; doubles as its backward rule.
    pub fn op(&self) -> &Op<T> {
        &self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Parent ids in operand order (empty for leaves).
    pub fn parents(&self) -> Vec<NodeId> {
        self.op.inputs()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}
