use crate::node::{Node, NodeId};

/// Builds a topological sort of the nodes reachable from `root`.
/// Used by `backward()` to process nodes in the correct order.
///
/// DFS post-order over parent links: every node appears after all of its
/// parents, index 0 is a leaf and the last element is `root`. The visited set
/// is a dense boolean array over arena indices, so a node shared by several
/// paths (diamonds, `a + a`) is emitted exactly once.
///
/// The walk uses an explicit stack rather than recursion so long chains do not
/// exhaust the call stack.
///
/// # Panics
/// If `root` is not in `nodes`, or if a node references a parent that is not
/// strictly older than itself (which would allow a cycle).
pub(crate) fn build_topo<T>(nodes: &[Node<T>], root: NodeId) -> Vec<NodeId> {
    assert!(
        root.0 < nodes.len(),
        "Malformed graph: root {} is out of bounds for {} nodes",
        root,
        nodes.len()
    );

    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::new();
    // (node, parents_done): a node is emitted when popped the second time.
    let mut stack = vec![(root, false)];

    while let Some((node, parents_done)) = stack.pop() {
        if parents_done {
            sorted_list.push(node);
            continue;
        }
        if visited[node.0] {
            continue;
        }
        visited[node.0] = true;
        stack.push((node, true));

        // Reversed so the first operand is explored first.
        for parent in nodes[node.0].op.inputs().into_iter().rev() {
            assert!(
                parent.0 < node.0,
                "Malformed graph: node {} references parent {} which is not older than itself",
                node,
                parent
            );
            if !visited[parent.0] {
                stack.push((parent, false));
            }
        }
    }

    log::trace!(
        "[build_topo] {} of {} nodes reachable from {}",
        sorted_list.len(),
        nodes.len(),
        root
    );
    sorted_list
}
