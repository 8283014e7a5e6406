// Define the Op variant and its backward dispatch here

use crate::config::TanhBackward;
use crate::node::{Node, NodeId};
use crate::ops::activation::{relu, tanh};
use crate::ops::arithmetic::{add, mul, pow, sub};
use crate::ops::traits::numeric::GradScalar;

/// The operation that produced a node, together with the ids of its inputs.
///
/// The variant is the node's backward rule: [`apply_backward`] reads it to
/// decide how the node's gradient is distributed to its parents. Parent ids
/// are listed in operand order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// Input value with no parents; its backward rule is a no-op.
    Leaf,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Base and constant exponent. The exponent is not a node and never
    /// receives a gradient.
    Pow(NodeId, T),
    Relu(NodeId),
    /// Input and the backward mode captured when the node was recorded.
    Tanh(NodeId, TanhBackward),
}

impl<T> Op<T> {
    /// Returns the parent ids of this operation in operand order.
    ///
    /// This is the only link from a node back to its predecessors and is what
    /// the topological sort follows.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Relu(a) | Op::Tanh(a, _) => vec![a],
        }
    }

    /// Diagnostic name of the operation (`none` for leaves).
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "none",
            Op::Add(..) => "add",
            Op::Sub(..) => "sub",
            Op::Mul(..) => "mul",
            Op::Pow(..) => "pow",
            Op::Relu(..) => "relu",
            Op::Tanh(..) => "tanh",
        }
    }
}

/// Runs the backward rule of node `id` once.
///
/// Reads the node's current gradient `g` and adds `g * d(node)/d(parent)` into
/// each parent's gradient. Gradients are only ever added to, so a parent used
/// twice (e.g. `a + a`) receives both contributions.
///
/// # Panics
/// If `id` or one of its parents is not a node of `nodes`. That can only
/// happen with a malformed graph and is treated as an engine bug.
pub(crate) fn apply_backward<T: GradScalar>(nodes: &mut [Node<T>], id: NodeId) {
    let (op, grad_output, output) = {
        let node = node_at(nodes, id);
        (node.op, node.grad, node.value)
    };

    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            let (grad_a, grad_b) = add::add_backward(grad_output);
            accumulate_gradient(nodes, a, grad_a);
            accumulate_gradient(nodes, b, grad_b);
        }
        Op::Sub(a, b) => {
            let (grad_a, grad_b) = sub::sub_backward(grad_output);
            accumulate_gradient(nodes, a, grad_a);
            accumulate_gradient(nodes, b, grad_b);
        }
        Op::Mul(a, b) => {
            let a_value = node_at(nodes, a).value;
            let b_value = node_at(nodes, b).value;
            let (grad_a, grad_b) = mul::mul_backward(grad_output, a_value, b_value);
            accumulate_gradient(nodes, a, grad_a);
            accumulate_gradient(nodes, b, grad_b);
        }
        Op::Pow(base, exponent) => {
            let base_value = node_at(nodes, base).value;
            let grad_base = pow::pow_backward(grad_output, base_value, exponent);
            accumulate_gradient(nodes, base, grad_base);
        }
        Op::Relu(input) => {
            let input_value = node_at(nodes, input).value;
            let grad_input = relu::relu_backward(grad_output, input_value);
            accumulate_gradient(nodes, input, grad_input);
        }
        Op::Tanh(_, TanhBackward::Detached) => {}
        Op::Tanh(input, TanhBackward::Derivative) => {
            let grad_input = tanh::tanh_backward(grad_output, output);
            accumulate_gradient(nodes, input, grad_input);
        }
    }
}

/// Adds `contribution` to the gradient of `target`.
pub(crate) fn accumulate_gradient<T: GradScalar>(
    nodes: &mut [Node<T>],
    target: NodeId,
    contribution: T,
) {
    let len = nodes.len();
    match nodes.get_mut(target.0) {
        Some(node) => node.grad += contribution,
        None => panic!(
            "Malformed graph: gradient target {} is out of bounds for {} nodes",
            target, len
        ),
    }
}

fn node_at<T>(nodes: &[Node<T>], id: NodeId) -> &Node<T> {
    assert!(
        id.0 < nodes.len(),
        "Malformed graph: node {} is out of bounds for {} nodes",
        id,
        nodes.len()
    );
    &nodes[id.0]
}
