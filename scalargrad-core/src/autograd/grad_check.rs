use crate::config::GraphConfig;
use crate::error::EngineError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::numeric::GradScalar;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for precision
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    Engine(#[from] EngineError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences, with the default [`GraphConfig`].
///
/// `func` receives a fresh graph and one leaf per entry of `inputs` and must
/// return the output node. For each input `i` the analytical gradient from a
/// backward pass is compared against
/// `(f(x_i + epsilon) - f(x_i - epsilon)) / (2 * epsilon)`; the check fails
/// when the difference exceeds `abs_tol + rel_tol * |numerical|`.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: T,
    abs_tol: T,
    rel_tol: T,
) -> Result<(), GradCheckError>
where
    T: GradScalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> NodeId,
{
    check_grad_with_config(GraphConfig::default(), func, inputs, epsilon, abs_tol, rel_tol)
}

/// Same as [`check_grad`], building every graph with `config`.
pub fn check_grad_with_config<T, F>(
    config: GraphConfig,
    func: F,
    inputs: &[T],
    epsilon: T,
    abs_tol: T,
    rel_tol: T,
) -> Result<(), GradCheckError>
where
    T: GradScalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> NodeId,
{
    let two = T::one() + T::one();

    // --- 1. Forward and Backward Pass ---
    let mut graph = Graph::with_config(config);
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves);
    graph.try_node(output)?;
    graph.backward(output);

    // --- 2. Numerical Gradient per Input ---
    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical = graph.try_node(leaf)?.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: to_f64(analytical),
            });
        }

        let loss_plus = evaluate(config, &func, inputs, i, inputs[i] + epsilon)?;
        let loss_minus = evaluate(config, &func, inputs, i, inputs[i] - epsilon)?;
        let numerical = (loss_plus - loss_minus) / (two * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: to_f64(loss_plus),
                loss_minus: to_f64(loss_minus),
            });
        }

        let difference = (analytical - numerical).abs();
        if difference > abs_tol + rel_tol * numerical.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: to_f64(analytical),
                numerical_grad: to_f64(numerical),
                difference: to_f64(difference),
            });
        }
    }

    Ok(())
}

/// Forward value of `func` with input `index` replaced by `value`.
fn evaluate<T, F>(
    config: GraphConfig,
    func: &F,
    inputs: &[T],
    index: usize,
    value: T,
) -> Result<T, GradCheckError>
where
    T: GradScalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> NodeId,
{
    let mut graph = Graph::with_config(config);
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { value } else { x }))
        .collect();
    let output = func(&mut graph, &leaves);
    Ok(graph.try_node(output)?.value())
}

fn to_f64<T: GradScalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
