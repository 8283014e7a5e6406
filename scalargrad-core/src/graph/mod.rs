// src/graph/mod.rs

use crate::autograd::Op;
use crate::config::GraphConfig;
use crate::error::EngineError;
use crate::node::{Node, NodeId, Operand};
use crate::ops::traits::numeric::GradScalar;

mod autograd;
mod debug;

pub use debug::NodeDisplay;

/// Arena holding every node of one computation.
///
/// Nodes are appended in creation order and never removed, so a [`NodeId`]
/// stays valid for the lifetime of the graph and every parent id is smaller
/// than the id of the node referencing it. The graph owns all of its nodes:
/// dropping it releases the whole computation at once.
///
/// `Graph` is single-owner. Recording operations and running a backward pass
/// take `&mut self`, which gives a pass exclusive access to every node it
/// mutates.
#[derive(Debug, Clone, Default)]
pub struct Graph<T> {
    pub(crate) nodes: Vec<Node<T>>,
    config: GraphConfig,
}

impl<T: GradScalar> Graph<T> {
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&mut self, value: T, op: Op<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        log::trace!("{} = {}({:?}) -> {}", id, op.name(), op.inputs(), value);
        self.nodes.push(Node::new(value, op));
        id
    }

    // --- Leaves ---

    /// Records an input value with no parents.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push(value, Op::Leaf)
    }

    pub fn leaf_with_label(&mut self, value: T, label: impl Into<String>) -> NodeId {
        let id = self.leaf(value);
        self.nodes[id.0].label = Some(label.into());
        id
    }

    /// Returns an existing node unchanged, or lifts a raw scalar into a fresh
    /// leaf labelled with its value.
    pub fn lift(&mut self, operand: impl Into<Operand<T>>) -> NodeId {
        match operand.into() {
            Operand::Node(id) => id,
            Operand::Scalar(value) => self.leaf_with_label(value, value.to_string()),
        }
    }

    // --- Accessors ---

    /// Returns the node behind `id`.
    ///
    /// # Panics
    /// If `id` does not belong to this graph. Use [`Graph::try_node`] for a
    /// fallible lookup.
    pub fn node(&self, id: NodeId) -> &Node<T> {
        match self.try_node(id) {
            Ok(node) => node,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_node(&self, id: NodeId) -> Result<&Node<T>, EngineError> {
        self.nodes.get(id.0).ok_or(EngineError::UnknownNode {
            index: id.0,
            len: self.nodes.len(),
        })
    }

    /// Forward value of `id`.
    pub fn value(&self, id: NodeId) -> T {
        self.node(id).value
    }

    /// Current accumulated gradient of `id`.
    pub fn grad(&self, id: NodeId) -> T {
        self.node(id).grad
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).label()
    }

    /// Attaches a display label. Labels never affect computation.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), EngineError> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(EngineError::UnknownNode { index: id.0, len })?;
        node.label = Some(label.into());
        Ok(())
    }

    pub fn op(&self, id: NodeId) -> &Op<T> {
        self.node(id).op()
    }

    pub fn parents(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).parents()
    }

    /// Iterates over `(id, node)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
