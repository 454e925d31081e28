//! Augmented-system working copies and elementary row operations
//!
//! The solver never mutates caller data: [`AugmentedSystem::new`] clones the
//! coefficient matrix and right-hand side into a private working pair, and
//! every row operation is applied to both halves in lockstep.

use crate::error::{GaussError, Result};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use std::fmt;

/// Working copies of a square system `A x = b`.
///
/// Row operations mutate the coefficient matrix and the right-hand side
/// together, so the pair always describes the same set of equations as the
/// original input.
#[derive(Debug, Clone)]
pub struct AugmentedSystem<T: RealField> {
    a: Array2<T>,
    b: Array1<T>,
}

impl<T: RealField> AugmentedSystem<T> {
    /// Validate shapes and clone `(a, b)` into a working pair.
    ///
    /// Fails with [`GaussError::NotSquare`] or
    /// [`GaussError::DimensionMismatch`] before anything is copied.
    pub fn new(a: &Array2<T>, b: &Array1<T>) -> Result<Self> {
        let (nrows, ncols) = (a.nrows(), a.ncols());
        if nrows != ncols {
            return Err(GaussError::NotSquare { nrows, ncols });
        }
        if nrows != b.len() {
            return Err(GaussError::DimensionMismatch {
                n: nrows,
                rhs_len: b.len(),
            });
        }
        Ok(Self {
            a: a.clone(),
            b: b.clone(),
        })
    }

    /// System dimension `n`.
    pub fn n(&self) -> usize {
        self.b.len()
    }

    /// Current coefficient matrix.
    pub fn a(&self) -> &Array2<T> {
        &self.a
    }

    /// Current right-hand side.
    pub fn b(&self) -> &Array1<T> {
        &self.b
    }

    /// Exchange two rows of the matrix and the paired right-hand-side
    /// entries.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        for j in 0..self.a.ncols() {
            let tmp = self.a[[row1, j]];
            self.a[[row1, j]] = self.a[[row2, j]];
            self.a[[row2, j]] = tmp;
        }
        self.b.swap(row1, row2);
    }

    /// Divide every coefficient of `row` and its right-hand-side entry by
    /// `divisor`.
    pub fn scale_row(&mut self, row: usize, divisor: T) {
        for j in 0..self.a.ncols() {
            self.a[[row, j]] /= divisor;
        }
        self.b[row] /= divisor;
    }

    /// Add `factor` times the source row to the target row, in both halves.
    pub fn combine_rows(&mut self, target: usize, source: usize, factor: T) {
        for j in 0..self.a.ncols() {
            let term = self.a[[source, j]] * factor;
            self.a[[target, j]] += term;
        }
        let term = self.b[source] * factor;
        self.b[target] += term;
    }

    /// Whether every coefficient of `row` has magnitude at most `tolerance`.
    pub fn is_zero_row(&self, row: usize, tolerance: T) -> bool {
        self.a.row(row).iter().all(|v| v.abs() <= tolerance)
    }
}

impl<T: RealField> fmt::Display for AugmentedSystem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n() {
            for j in 0..self.a.ncols() {
                if j > 0 {
                    write!(f, " + ")?;
                }
                write!(f, "({:5.2}) * x{}", self.a[[i, j]], j)?;
            }
            writeln!(f, " = {:5.2}", self.b[i])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shape_validation() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0, 2.0];
        assert_eq!(
            AugmentedSystem::new(&a, &b).unwrap_err(),
            GaussError::NotSquare { nrows: 2, ncols: 3 }
        );

        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![1.0, 2.0, 3.0];
        assert_eq!(
            AugmentedSystem::new(&a, &b).unwrap_err(),
            GaussError::DimensionMismatch { n: 2, rhs_len: 3 }
        );
    }

    #[test]
    fn test_swap_rows() {
        let mut system =
            AugmentedSystem::new(&array![[1.0, 2.0], [3.0, 4.0]], &array![5.0, 6.0]).unwrap();
        system.swap_rows(0, 1);
        assert_eq!(system.a(), &array![[3.0, 4.0], [1.0, 2.0]]);
        assert_eq!(system.b(), &array![6.0, 5.0]);
    }

    #[test]
    fn test_scale_row_divides() {
        let mut system =
            AugmentedSystem::new(&array![[2.0, 4.0], [1.0, 1.0]], &array![6.0, 1.0]).unwrap();
        system.scale_row(0, 2.0);
        assert_eq!(system.a(), &array![[1.0, 2.0], [1.0, 1.0]]);
        assert_eq!(system.b(), &array![3.0, 1.0]);
    }

    #[test]
    fn test_combine_rows() {
        let mut system =
            AugmentedSystem::new(&array![[1.0, 2.0], [3.0, 4.0]], &array![5.0, 6.0]).unwrap();
        system.combine_rows(1, 0, -3.0);
        assert_eq!(system.a(), &array![[1.0, 2.0], [0.0, -2.0]]);
        assert_eq!(system.b(), &array![5.0, -9.0]);
    }

    #[test]
    fn test_zero_row_tolerance() {
        let system = AugmentedSystem::new(&array![[1e-12, -1e-12], [1.0, 2.0]], &array![0.0, 1.0])
            .unwrap();
        assert!(system.is_zero_row(0, 1e-10));
        assert!(!system.is_zero_row(0, 1e-14));
        assert!(!system.is_zero_row(1, 1e-10));
    }

    #[test]
    fn test_display_format() {
        let system =
            AugmentedSystem::new(&array![[3.0, 2.0], [1.0, -1.0]], &array![7.0, 4.0]).unwrap();
        assert_eq!(
            system.to_string(),
            "( 3.00) * x0 + ( 2.00) * x1 =  7.00\n( 1.00) * x0 + (-1.00) * x1 =  4.00\n"
        );
    }
}
