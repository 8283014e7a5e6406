use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;

/// Checks that `actual` is within `tolerance` of `expected`.
/// Panics with both values and the difference otherwise.
pub fn check_near<T: GradScalar>(actual: T, expected: T, tolerance: T) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradients of `ids` against `expected`, element by element.
pub fn check_grads_near<T: GradScalar>(
    graph: &Graph<T>,
    ids: &[NodeId],
    expected: &[T],
    tolerance: T,
) {
    assert_eq!(ids.len(), expected.len(), "Gradient count mismatch");
    for (i, (&id, &e)) in ids.iter().zip(expected.iter()).enumerate() {
        let actual = graph.grad(id);
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, id, actual, e, diff, tolerance
            );
        }
    }
}
