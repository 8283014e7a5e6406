use super::*;

#[test]
fn test_new_graph_is_empty() {
    let g = Graph::<f64>::new();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
    assert_eq!(*g.config(), GraphConfig::default());
}

#[test]
fn test_leaf() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.25);
    let node = g.node(a);

    assert_eq!(a.index(), 0);
    assert_eq!(node.value(), 1.25);
    assert_eq!(node.grad(), 0.0);
    assert!(node.is_leaf());
    assert!(node.parents().is_empty());
    assert_eq!(node.label(), None);
    assert_eq!(node.op().name(), "none");
}

#[test]
fn test_leaf_with_label() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf_with_label(2.0, "a");
    assert_eq!(g.label(a), Some("a"));
}

#[test]
fn test_lift_returns_existing_node_unchanged() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(2.0);
    assert_eq!(g.lift(a), a);
    assert_eq!(g.len(), 1);
}

#[test]
fn test_lift_scalar_creates_leaf() {
    let mut g = Graph::<f64>::new();
    let a = g.lift(4.5);
    assert_eq!(g.len(), 1);
    assert!(g.node(a).is_leaf());
    assert_eq!(g.value(a), 4.5);
    assert_eq!(g.label(a), Some("4.5"));
}

#[test]
fn test_equal_values_are_distinct_nodes() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0);
    let b = g.leaf(1.0);
    assert_ne!(a, b);

    let c = g.mul(a, b);
    g.backward(c);
    assert_eq!(g.grad(a), 1.0);
    assert_eq!(g.grad(b), 1.0);
}

#[test]
fn test_try_node_unknown() {
    let g = Graph::<f64>::new();
    assert_eq!(
        g.try_node(NodeId(3)),
        Err(EngineError::UnknownNode { index: 3, len: 0 })
    );
}

#[test]
#[should_panic(expected = "Unknown node")]
fn test_node_unknown_panics() {
    let g = Graph::<f64>::new();
    g.value(NodeId(0));
}

#[test]
fn test_set_label() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0);
    let b = g.relu(a);
    assert_eq!(g.set_label(b, "hidden"), Ok(()));
    assert_eq!(g.label(b), Some("hidden"));
    assert_eq!(
        g.set_label(NodeId(9), "nope"),
        Err(EngineError::UnknownNode { index: 9, len: 2 })
    );
}

#[test]
fn test_iter_in_creation_order() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0);
    let b = g.add(a, 2.0);
    let ids: Vec<NodeId> = g.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![a, NodeId(1), b]);
}

#[test]
fn test_zero_grad_single_node() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(3.0);
    let b = g.leaf(4.0);
    let c = g.mul(a, b);
    g.backward(c);

    g.zero_grad(a);
    assert_eq!(g.grad(a), 0.0);
    // Other nodes keep their gradients
    assert_eq!(g.grad(b), 3.0);
    assert_eq!(g.grad(c), 1.0);
}

#[test]
fn test_backward_on_leaf_seeds_one() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(3.0);
    g.backward(a);
    assert_eq!(g.grad(a), 1.0);
}

#[test]
fn test_backward_leaves_unreachable_nodes_alone() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0);
    let b = g.leaf(2.0);
    let unrelated = g.mul(b, 5.0);
    let c = g.mul(a, 3.0);
    g.backward(c);

    assert_eq!(g.grad(a), 3.0);
    assert_eq!(g.grad(b), 0.0);
    assert_eq!(g.grad(unrelated), 0.0);
}

#[test]
fn test_topological_order() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0);
    let b = g.leaf(2.0);
    let c = g.add(a, b);
    let d = g.relu(c);

    let order = g.topological_order(d);
    assert_eq!(order, vec![a, b, c, d]);
}

#[test]
fn test_display_leaf() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf_with_label(2.5, "a");
    assert_eq!(
        g.display(a).to_string(),
        "Node(value=2.5, gradient=0, parents=None)"
    );
}

#[test]
fn test_display_op_node() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf_with_label(3.0, "a");
    let b = g.leaf_with_label(4.0, "b");
    let c = g.mul(a, b);
    g.backward(c);

    assert_eq!(
        g.display(c).to_string(),
        "Node(value=12, gradient=1, parents=a,b)"
    );
    assert_eq!(
        g.display(a).to_string(),
        "Node(value=3, gradient=4, parents=None)"
    );
}

#[test]
fn test_display_unlabeled_and_lifted_parents() {
    let mut g = Graph::<f64>::new();
    let a = g.leaf(1.0);
    let b = g.add(a, 2.0);
    assert_eq!(
        g.display(b).to_string(),
        "Node(value=3, gradient=0, parents=#0,2)"
    );
}

#[test]
fn test_display_unknown_node() {
    let g = Graph::<f64>::new();
    assert_eq!(g.display(NodeId(5)).to_string(), "Node(unknown #5)");
}
