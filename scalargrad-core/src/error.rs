use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Only recoverable, caller-facing conditions live here. Broken engine
/// invariants (a parent index pointing past the arena during a backward pass)
/// panic instead.
#[derive(Error, Debug, PartialEq, Eq, Clone)] // PartialEq for easier testing
pub enum EngineError {
    #[error("Unknown node: index {index} is out of bounds for a graph of {len} nodes")]
    UnknownNode { index: usize, len: usize },
}
