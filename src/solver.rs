//! Entry points: configuration, validation and dispatch
//!
//! [`solve`] is the plain contract: borrow `(A, b)`, get the solution or a
//! classification error back. [`solve_with`] exposes the two knobs the
//! plain call hides, the zero tolerance and an observer for step-by-step
//! tracing.

use crate::elimination::{back_substitute, triangularize};
use crate::error::Result;
use crate::observer::{EliminationObserver, SilentObserver};
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct GaussConfig<T> {
    /// Magnitudes at or below this value are treated as zero, both in the
    /// degeneracy scan and in the pivot guard.
    pub tolerance: T,
}

impl Default for GaussConfig<f64> {
    fn default() -> Self {
        Self { tolerance: 1e-10 }
    }
}

impl Default for GaussConfig<f32> {
    fn default() -> Self {
        Self { tolerance: 1e-5 }
    }
}

impl<T: RealField> GaussConfig<T> {
    /// Create a configuration with an explicit zero tolerance.
    pub fn with_tolerance(tolerance: T) -> Self {
        Self { tolerance }
    }
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// The inputs are borrowed and never modified; elimination runs on private
/// working copies. On success the returned vector is the unique solution of
/// the system. Degenerate systems are classified instead of solved:
/// [`GaussError::NoSolution`](crate::GaussError::NoSolution) for
/// inconsistent systems,
/// [`GaussError::InfiniteSolutions`](crate::GaussError::InfiniteSolutions)
/// for underdetermined ones.
///
/// # Example
///
/// ```
/// use math_gauss::solve;
/// use ndarray::array;
///
/// let a = array![[3.0_f64, 2.0], [1.0, -1.0]];
/// let b = array![7.0, 4.0];
/// let x = solve(&a, &b).unwrap();
/// assert!((x[0] - 3.0).abs() < 1e-9);
/// assert!((x[1] + 1.0).abs() < 1e-9);
/// ```
pub fn solve<T>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>>
where
    T: RealField,
    GaussConfig<T>: Default,
{
    solve_with(a, b, &GaussConfig::default(), &mut SilentObserver)
}

/// Solve with an explicit configuration and observer.
///
/// The observer receives every structural step of the elimination together
/// with the current working copies, in mutation order. It cannot influence
/// the outcome: a traced solve returns exactly what [`solve`] would.
pub fn solve_with<T, O>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussConfig<T>,
    observer: &mut O,
) -> Result<Array1<T>>
where
    T: RealField,
    O: EliminationObserver<T>,
{
    let mut system = AugmentedSystem::new(a, b)?;
    log::debug!(
        "reducing a {}x{} system (zero tolerance {:e})",
        system.n(),
        system.n(),
        config.tolerance
    );
    triangularize(&mut system, config, observer)?;
    Ok(back_substitute(&system))
}
