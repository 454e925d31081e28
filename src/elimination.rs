//! Forward elimination and back substitution
//!
//! Triangularization walks the diagonal: for each column it scans for
//! degenerate rows, swaps the largest-magnitude candidate into the pivot
//! position, normalizes the pivot row to a unit diagonal and eliminates
//! every entry below. Back substitution then reads the solution off the
//! reduced system from the last row upward.

use crate::error::{GaussError, Result};
use crate::observer::{EliminationObserver, EliminationStep};
use crate::solver::GaussConfig;
use crate::system::AugmentedSystem;
use crate::traits::RealField;
use ndarray::Array1;

/// Reduce the system to unit-diagonal upper-triangular form.
///
/// Fails with [`GaussError::NoSolution`] or
/// [`GaussError::InfiniteSolutions`] when a degenerate row shows up, and
/// with [`GaussError::ZeroPivot`] when a column has no usable pivot.
pub(crate) fn triangularize<T, O>(
    system: &mut AugmentedSystem<T>,
    config: &GaussConfig<T>,
    observer: &mut O,
) -> Result<()>
where
    T: RealField,
    O: EliminationObserver<T>,
{
    let n = system.n();
    for column in 0..n {
        // Scan the full matrix on every pass; eliminations in earlier
        // columns can have produced new zero rows anywhere below them.
        scan_for_degenerate_rows(system, config.tolerance)?;
        observer.on_step(EliminationStep::ColumnStart { column }, system);

        let pivot_row = find_pivot_row(system, column);
        let swapped = pivot_row != column;
        if swapped {
            system.swap_rows(column, pivot_row);
        }
        observer.on_step(
            EliminationStep::PivotSelected {
                column,
                pivot_row,
                swapped,
            },
            system,
        );

        let pivot = system.a()[[column, column]];
        if pivot.abs() <= config.tolerance {
            return Err(GaussError::ZeroPivot { column });
        }
        system.scale_row(column, pivot);
        observer.on_step(EliminationStep::RowNormalized { row: column, pivot }, system);

        for row in column + 1..n {
            let factor = -system.a()[[row, column]];
            system.combine_rows(row, column, factor);
            observer.on_step(
                EliminationStep::RowEliminated {
                    target: row,
                    source: column,
                    factor,
                },
                system,
            );
        }
    }
    Ok(())
}

/// Classify degenerate rows before touching a column.
///
/// A row whose coefficients are all within `tolerance` of zero makes the
/// system inconsistent (non-zero right-hand side) or underdetermined (zero
/// right-hand side). The first such row wins.
fn scan_for_degenerate_rows<T: RealField>(
    system: &AugmentedSystem<T>,
    tolerance: T,
) -> Result<()> {
    for row in 0..system.n() {
        if system.is_zero_row(row, tolerance) {
            if system.b()[row].abs() > tolerance {
                return Err(GaussError::NoSolution { row });
            }
            return Err(GaussError::InfiniteSolutions { row });
        }
    }
    Ok(())
}

/// Row holding the largest-magnitude entry of `column`, at or below the
/// diagonal. Strict comparison, so the first row attaining the maximum wins.
fn find_pivot_row<T: RealField>(system: &AugmentedSystem<T>, column: usize) -> usize {
    let mut pivot_row = column;
    for row in column + 1..system.n() {
        if system.a()[[row, column]].abs() > system.a()[[pivot_row, column]].abs() {
            pivot_row = row;
        }
    }
    pivot_row
}

/// Read the solution off a unit-diagonal upper-triangular system.
pub(crate) fn back_substitute<T: RealField>(system: &AugmentedSystem<T>) -> Array1<T> {
    let n = system.n();
    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in i + 1..n {
            sum += x[j] * system.a()[[i, j]];
        }
        x[i] = system.b()[i] - sum;
    }
    x
}
