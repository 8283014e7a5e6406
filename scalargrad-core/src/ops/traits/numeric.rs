use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the scalar types a [`Graph`](crate::Graph) can hold.
///
/// Restricted to floating point (`f32`, `f64`): every local derivative rule
/// relies on real arithmetic (`powf`, `tanh`) and IEEE NaN semantics for
/// out-of-domain inputs.
pub trait GradScalar:
    Float // Includes Num + Copy + PartialOrd + zero()/one()
    + NumAssignOps // `+=` for gradient accumulation
    + Debug
    + Display // Lifted scalars are labelled with their formatted value
    + 'static
{
}

impl GradScalar for f32 {}
impl GradScalar for f64 {}
