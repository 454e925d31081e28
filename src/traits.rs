//! Scalar trait for real-valued elimination
//!
//! The solver is generic over the floating-point type of the system. The
//! [`RealField`] trait collects the arithmetic and formatting bounds the
//! elimination needs; in practice it means `f64` (the recommended default)
//! and `f32`.

use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Scalar types the solver accepts.
///
/// This is a bounds alias rather than an interface: any floating-point type
/// with ordinary arithmetic, the assignment operators and standard
/// formatting qualifies automatically through the blanket implementation.
pub trait RealField:
    Float + NumAssign + Debug + Display + LowerExp + Send + Sync + 'static
{
}

impl<T> RealField for T where
    T: Float + NumAssign + Debug + Display + LowerExp + Send + Sync + 'static
{
}
