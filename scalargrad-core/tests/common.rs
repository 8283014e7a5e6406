use scalargrad_core::{Graph, NodeId};

// Installs env_logger once per test binary; RUST_LOG=trace shows the walk.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Gradients of every node reachable from `root`, in topological order.
#[allow(dead_code)]
pub fn reachable_grads(graph: &Graph<f64>, root: NodeId) -> Vec<(NodeId, f64)> {
    graph
        .topological_order(root)
        .into_iter()
        .map(|id| (id, graph.grad(id)))
        .collect()
}

/// Resets every node reachable from `root`. The engine itself only resets one
/// node at a time.
#[allow(dead_code)]
pub fn zero_reachable(graph: &mut Graph<f64>, root: NodeId) {
    for id in graph.topological_order(root) {
        graph.zero_grad(id);
    }
}
