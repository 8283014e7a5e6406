//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over a dynamically built graph of
//! scalar values.
//!
//! Every value lives in a [`Graph`] arena and is addressed by a copyable
//! [`NodeId`]. Operations (`add`, `sub`, `mul`, `pow`, `relu`, `tanh`) are
//! methods on the graph that record one new node each; [`Graph::backward`]
//! then walks the recorded DAG once in reverse topological order and
//! accumulates `d(root)/d(node)` into every node that contributed to the root.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let mut g = Graph::<f64>::new();
//! let a = g.leaf(3.0);
//! let b = g.leaf(4.0);
//! let c = g.mul(a, b);
//! g.backward(c);
//! assert_eq!(g.grad(a), 4.0);
//! assert_eq!(g.grad(b), 3.0);
//! ```

// Core data model
pub mod config;
pub mod error;
pub mod graph;
pub mod node;

// Differentiation machinery and the operation set
pub mod autograd;
pub mod ops;

pub mod utils;

pub use config::{GraphConfig, TanhBackward};
pub use error::EngineError;
pub use graph::Graph;
pub use node::{Node, NodeId, Operand};
pub use ops::traits::numeric::GradScalar;
// Re-export traits required by public functions/structs
pub use num_traits;
