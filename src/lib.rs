//! Gaussian elimination for small dense linear systems
//!
//! Solves square systems `A x = b` by forward elimination with partial
//! pivoting followed by back substitution, classifying every input as
//! uniquely solvable, inconsistent ([`GaussError::NoSolution`]) or
//! underdetermined ([`GaussError::InfiniteSolutions`]).
//!
//! Inputs are borrowed; elimination runs on private working copies, so the
//! caller's matrix and right-hand side are never modified.
//!
//! # Example
//!
//! ```
//! use math_gauss::solve;
//! use ndarray::array;
//!
//! // 3*x0 + 2*x1 = 7
//! //   x0 -   x1 = 4
//! let a = array![[3.0_f64, 2.0], [1.0, -1.0]];
//! let b = array![7.0, 4.0];
//!
//! let x = solve(&a, &b).unwrap();
//! assert!((x[0] - 3.0).abs() < 1e-9);
//! assert!((x[1] + 1.0).abs() < 1e-9);
//! ```
//!
//! Step-by-step tracing goes through [`EliminationObserver`] and
//! [`solve_with`]; the zero tolerance used to classify degenerate systems
//! is configurable through [`GaussConfig`].

#![warn(missing_docs)]

mod elimination;
mod error;
mod observer;
mod solver;
mod system;
mod traits;

// Make testdata publicly available for tests
pub mod testdata;

pub use error::{GaussError, Result};
pub use observer::{EliminationObserver, EliminationStep, LoggingObserver, SilentObserver};
pub use solver::{solve, solve_with, GaussConfig};
pub use system::AugmentedSystem;
pub use traits::RealField;
