// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear unary operations recorded on the graph.
//!
//! ## Currently Implemented:
//! - [`relu`]: Rectified Linear Unit, sub-gradient 0 at the kink.
//! - [`tanh`]: Hyperbolic tangent. Its backward behaviour is chosen by
//!   [`TanhBackward`](crate::config::TanhBackward).

pub mod relu;
pub mod tanh;

// Re-export the forward value functions
pub use relu::relu_forward;
pub use tanh::tanh_forward;
