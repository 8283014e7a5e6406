// src/config.rs

/// How gradients flow back through a `tanh` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TanhBackward {
    /// `tanh` nodes carry no backward rule: their input receives no gradient.
    #[default]
    Detached,
    /// `tanh` nodes propagate `g * (1 - tanh(x)^2)` to their input.
    Derivative,
}

/// Construction-time settings of a [`Graph`](crate::Graph).
///
/// Settings are captured on each node when it is recorded, so changing the
/// configuration never alters nodes that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub tanh_backward: TanhBackward,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backward behaviour of subsequently recorded `tanh` nodes.
    pub fn with_tanh_backward(mut self, tanh_backward: TanhBackward) -> Self {
        self.tanh_backward = tanh_backward;
        self
    }
}
