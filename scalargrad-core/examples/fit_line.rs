//! # Fitting a line with scalargrad-core
//!
//! Learns `w` and `b` in `y = w * x + b` by plain gradient descent.
//!
//! ## Demonstrated:
//! 1.  **Graph per step**: node values are immutable, so every step records a
//!     fresh graph from the current parameter values.
//! 2.  **Gradient accumulation**: one backward pass per sample on the same
//!     parameter leaves sums the per-sample gradients (no `zero_grad` in
//!     between on purpose).
//!
//! ## Running
//! `RUST_LOG=info cargo run --example fit_line`

use scalargrad_core::{Graph, NodeId};

const LEARNING_RATE: f64 = 0.05;
const STEPS: usize = 200;

/// (y_pred - y)^2 for one sample.
fn sample_loss(g: &mut Graph<f64>, w: NodeId, b: NodeId, x: f64, y: f64) -> NodeId {
    let wx = g.mul(w, x);
    let pred = g.add(wx, b);
    let err = g.sub(pred, y);
    g.pow(err, 2.0)
}

fn main() {
    let _ = env_logger::builder().try_init();

    // Synthetic data from y = 2x - 1
    let data: Vec<(f64, f64)> = (0..8)
        .map(|i| {
            let x = i as f64 * 0.5 - 2.0;
            (x, 2.0 * x - 1.0)
        })
        .collect();
    let n = data.len() as f64;

    let (mut w_value, mut b_value) = (0.0, 0.0);

    for step in 0..STEPS {
        let mut g = Graph::<f64>::new();
        let w = g.leaf_with_label(w_value, "w");
        let b = g.leaf_with_label(b_value, "b");

        let mut total = 0.0;
        for &(x, y) in &data {
            let loss = sample_loss(&mut g, w, b, x, y);
            total += g.value(loss);
            g.backward(loss);
        }

        if step % 20 == 0 {
            log::info!("step {:3}: mse={:.6} w={}", step, total / n, g.display(w));
        }

        w_value -= LEARNING_RATE * g.grad(w) / n;
        b_value -= LEARNING_RATE * g.grad(b) / n;
    }

    println!("learned w = {:.4}, b = {:.4} (target 2, -1)", w_value, b_value);
}
