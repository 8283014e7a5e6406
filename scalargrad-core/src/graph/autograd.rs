// src/graph/autograd.rs

use crate::autograd::backward_op::apply_backward;
use crate::autograd::graph::build_topo;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;

impl<T: GradScalar> Graph<T> {
    /// Computes `d(root)/d(node)` for every node reachable from `root`.
    ///
    /// Orders the reachable nodes once, overwrites `root`'s gradient with 1
    /// and then invokes each node's backward rule exactly once in reverse
    /// topological order. Every other gradient is accumulated, so calling
    /// this twice without [`Graph::zero_grad`] in between doubles the
    /// gradients of all reachable nodes except `root`.
    ///
    /// # Panics
    /// If `root` does not belong to this graph or the graph is malformed.
    pub fn backward(&mut self, root: NodeId) {
        let order = build_topo(&self.nodes, root);
        log::debug!(
            "backward from {}: {} reachable nodes of {}",
            root,
            order.len(),
            self.nodes.len()
        );

        self.nodes[root.0].grad = T::one();

        for &node in order.iter().rev() {
            log::trace!(
                "backward {} ({}) grad={}",
                node,
                self.nodes[node.0].op.name(),
                self.nodes[node.0].grad
            );
            apply_backward(&mut self.nodes, node);
        }
    }

    /// Resets the gradient of a single node to zero.
    ///
    /// No bulk reset is performed: resetting every node between passes is the
    /// caller's responsibility (see [`Graph::topological_order`]).
    pub fn zero_grad(&mut self, node: NodeId) {
        let len = self.nodes.len();
        match self.nodes.get_mut(node.0) {
            Some(n) => n.grad = T::zero(),
            None => panic!("zero_grad on node {} of a graph with {} nodes", node, len),
        }
    }

    /// Nodes reachable from `root`, each after all of its parents.
    pub fn topological_order(&self, root: NodeId) -> Vec<NodeId> {
        build_topo(&self.nodes, root)
    }
}
