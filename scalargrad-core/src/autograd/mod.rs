//! # Autograd machinery
//!
//! - [`backward_op`]: the tagged [`Op`] recorded on every node and the single
//!   dispatch function that applies its local derivative.
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
