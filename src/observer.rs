//! Observation hooks for elimination tracing
//!
//! Reporting is a collaborator concern, not a solver concern: the solver
//! notifies an [`EliminationObserver`] after each structural step and the
//! observer decides what, if anything, to do with the snapshot. Observers
//! cannot influence control flow or results.

use crate::system::AugmentedSystem;
use crate::traits::RealField;
use std::fmt;

/// A single structural step of the elimination, reported to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EliminationStep<T> {
    /// A column pass is starting; the degeneracy scan has already passed.
    ColumnStart {
        /// Column about to be processed
        column: usize,
    },
    /// Partial pivoting chose a pivot row for the column, and swapped it
    /// into place when it was not already there.
    PivotSelected {
        /// Column being processed
        column: usize,
        /// Row chosen as pivot, at its position before the swap
        pivot_row: usize,
        /// Whether a swap was performed
        swapped: bool,
    },
    /// The pivot row was divided by its pivot value; its diagonal entry is
    /// now 1.
    RowNormalized {
        /// The normalized row
        row: usize,
        /// Divisor, i.e. the pivot value before normalization
        pivot: T,
    },
    /// A scaled copy of the pivot row was added to a row below it.
    RowEliminated {
        /// Row that was modified
        target: usize,
        /// Pivot row that was added
        source: usize,
        /// Scale factor applied to the source row
        factor: T,
    },
}

impl<T: RealField> fmt::Display for EliminationStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EliminationStep::ColumnStart { column } => {
                write!(f, "searching for the largest pivot in column {}", column)
            }
            EliminationStep::PivotSelected {
                column,
                pivot_row,
                swapped: true,
            } => write!(f, "swapped row {} into row {} as pivot", pivot_row, column),
            EliminationStep::PivotSelected {
                column, pivot_row, ..
            } => write!(f, "row {} kept as pivot for column {}", pivot_row, column),
            EliminationStep::RowNormalized { row, pivot } => {
                write!(f, "divided row {} by {:.2}", row, pivot)
            }
            EliminationStep::RowEliminated {
                target,
                source,
                factor,
            } => write!(f, "added row {} times {:.2} to row {}", source, factor, target),
        }
    }
}

/// Receives elimination steps together with the current system state.
///
/// The solver calls observers synchronously, in exactly the order the
/// mutations happen, so replaying the reported steps against a copy of the
/// input reproduces the working state byte for byte.
pub trait EliminationObserver<T: RealField> {
    /// Called after each structural step with the current working copies.
    fn on_step(&mut self, step: EliminationStep<T>, system: &AugmentedSystem<T>);
}

/// Observer that ignores every step. [`solve`](crate::solve) uses it.
#[derive(Clone, Debug, Default)]
pub struct SilentObserver;

impl<T: RealField> EliminationObserver<T> for SilentObserver {
    fn on_step(&mut self, _step: EliminationStep<T>, _system: &AugmentedSystem<T>) {}
}

/// Observer that writes each step and the system it produced to the `log`
/// facade at debug level.
#[derive(Clone, Debug, Default)]
pub struct LoggingObserver;

impl<T: RealField> EliminationObserver<T> for LoggingObserver {
    fn on_step(&mut self, step: EliminationStep<T>, system: &AugmentedSystem<T>) {
        log::debug!("{}", step);
        for line in system.to_string().lines() {
            log::debug!("    {}", line);
        }
    }
}
