// src/graph/debug.rs
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;
use std::fmt;

/// Borrowed view rendering one node as
/// `Node(value=<v>, gradient=<g>, parents=<labels>)`.
///
/// Parents are listed by label, comma separated; an unlabeled parent is shown
/// by its id (`#3`) and a leaf shows `parents=None`.
pub struct NodeDisplay<'g, T> {
    graph: &'g Graph<T>,
    id: NodeId,
}

impl<T: GradScalar> Graph<T> {
    /// Returns a `Display`-able view of `id` for inspection and tests.
    pub fn display(&self, id: NodeId) -> NodeDisplay<'_, T> {
        NodeDisplay { graph: self, id }
    }
}

impl<T: GradScalar> fmt::Display for NodeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = match self.graph.try_node(self.id) {
            Ok(node) => node,
            Err(_) => return write!(f, "Node(unknown {})", self.id), // Foreign id
        };

        let parents = node.parents();
        let labels = if parents.is_empty() {
            "None".to_string()
        } else {
            parents
                .iter()
                .map(|&p| match self.graph.label(p) {
                    Some(label) => label.to_string(),
                    None => p.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",")
        };

        write!(
            f,
            "Node(value={}, gradient={}, parents={})",
            node.value, node.grad, labels
        )
    }
}

impl<T: GradScalar> fmt::Debug for NodeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
