//! Reference systems for solver tests
//!
//! Five small systems with known classifications: three well-posed systems
//! with known solutions, one underdetermined and one inconsistent system.
//! Integration tests and the QA binary both draw from here.

use ndarray::{array, Array1, Array2};

/// 2x2 system with the unique solution `[3, -1]`.
pub fn well_posed_2x2() -> (Array2<f64>, Array1<f64>) {
    (array![[3.0, 2.0], [1.0, -1.0]], array![7.0, 4.0])
}

/// Solution of [`well_posed_2x2`].
pub fn well_posed_2x2_solution() -> Array1<f64> {
    array![3.0, -1.0]
}

/// 3x3 system with the unique solution `[4, 3, 5]`.
pub fn well_posed_3x3() -> (Array2<f64>, Array1<f64>) {
    (
        array![[1.0, 2.0, 0.0], [3.0, 2.0, 1.0], [0.0, 1.0, 2.0]],
        array![10.0, 23.0, 13.0],
    )
}

/// Solution of [`well_posed_3x3`].
pub fn well_posed_3x3_solution() -> Array1<f64> {
    array![4.0, 3.0, 5.0]
}

/// 4x4 system with a non-integer solution near `[2.49, -1.06, 0.54, -0.96]`.
pub fn well_posed_4x4() -> (Array2<f64>, Array1<f64>) {
    (
        array![
            [5.0, 4.0, -6.0, 1.0],
            [7.0, -1.0, 4.0, 8.0],
            [0.0, 5.0, 3.0, -9.0],
            [4.0, 0.0, 7.0, 6.0]
        ],
        array![4.0, 13.0, 5.0, 8.0],
    )
}

/// Approximate solution of [`well_posed_4x4`], good to two decimals.
pub fn well_posed_4x4_solution() -> Array1<f64> {
    array![2.49, -1.06, 0.54, -0.96]
}

/// 3x3 system whose first two rows are proportional: infinitely many
/// solutions.
pub fn underdetermined_3x3() -> (Array2<f64>, Array1<f64>) {
    (
        array![[2.0, 3.0, -1.0], [4.0, 6.0, -2.0], [3.0, -1.0, 2.0]],
        array![3.0, 6.0, -1.0],
    )
}

/// 3x3 system whose first row contradicts the sum of the other two: no
/// solution.
pub fn inconsistent_3x3() -> (Array2<f64>, Array1<f64>) {
    (
        array![[7.0, -2.0, -1.0], [6.0, -4.0, -5.0], [1.0, 2.0, 4.0]],
        array![2.0, 3.0, 5.0],
    )
}
