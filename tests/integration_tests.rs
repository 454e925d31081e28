//! End-to-end tests over the reference systems

use approx::assert_relative_eq;
use math_gauss::testdata;
use math_gauss::{solve, solve_with, GaussConfig, LoggingObserver};
use ndarray::{array, Array1, Array2};

/// Solve and assert that the residual `A x - b` vanishes.
fn solve_and_check_residual(a: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let x = solve(a, b).expect("system should have a unique solution");
    let ax = a.dot(&x);
    for i in 0..b.len() {
        assert_relative_eq!(ax[i], b[i], epsilon = 1e-9, max_relative = 1e-9);
    }
    x
}

#[test]
fn test_well_posed_2x2() {
    let (a, b) = testdata::well_posed_2x2();
    let x = solve_and_check_residual(&a, &b);
    let expected = testdata::well_posed_2x2_solution();
    for i in 0..2 {
        assert_relative_eq!(x[i], expected[i], epsilon = 1e-9);
    }
}

#[test]
fn test_well_posed_3x3() {
    let (a, b) = testdata::well_posed_3x3();
    let x = solve_and_check_residual(&a, &b);
    let expected = testdata::well_posed_3x3_solution();
    for i in 0..3 {
        assert_relative_eq!(x[i], expected[i], epsilon = 1e-9);
    }
}

#[test]
fn test_well_posed_4x4() {
    let (a, b) = testdata::well_posed_4x4();
    let x = solve_and_check_residual(&a, &b);
    let expected = testdata::well_posed_4x4_solution();
    for i in 0..4 {
        assert!(
            (x[i] - expected[i]).abs() < 0.01,
            "x{} = {} is too far from {}",
            i,
            x[i],
            expected[i]
        );
    }
}

#[test]
fn test_underdetermined_system() {
    let (a, b) = testdata::underdetermined_3x3();
    let err = solve(&a, &b).unwrap_err();
    assert!(err.is_infinite_solutions());
}

#[test]
fn test_inconsistent_system() {
    let (a, b) = testdata::inconsistent_3x3();
    let err = solve(&a, &b).unwrap_err();
    assert!(err.is_no_solution());
}

#[test]
fn test_singular_column() {
    let err = solve(&array![[0.0, 1.0], [0.0, 2.0]], &array![1.0, 2.0]).unwrap_err();
    assert!(err.is_zero_pivot());
}

#[test]
fn test_repeated_solves_are_identical() {
    let (a, b) = testdata::well_posed_4x4();
    assert_eq!(solve(&a, &b).unwrap(), solve(&a, &b).unwrap());
}

#[test]
fn test_inputs_are_not_mutated() {
    let (a, b) = testdata::well_posed_3x3();
    let a_before = a.clone();
    let b_before = b.clone();
    solve(&a, &b).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);

    // classification paths copy the inputs too
    let (a, b) = testdata::inconsistent_3x3();
    let a_before = a.clone();
    let b_before = b.clone();
    solve(&a, &b).unwrap_err();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_traced_solve_matches_plain_solve() {
    let (a, b) = testdata::well_posed_3x3();
    let plain = solve(&a, &b).unwrap();
    let traced = solve_with(&a, &b, &GaussConfig::default(), &mut LoggingObserver).unwrap();
    assert_eq!(plain, traced);
}

#[test]
fn test_f32_system() {
    let a = array![[3.0_f32, 2.0], [1.0, -1.0]];
    let b = array![7.0_f32, 4.0];
    let x = solve(&a, &b).unwrap();
    assert_relative_eq!(x[0], 3.0_f32, epsilon = 1e-4);
    assert_relative_eq!(x[1], -1.0_f32, epsilon = 1e-4);
}

#[test]
fn test_empty_system() {
    let a = Array2::<f64>::zeros((0, 0));
    let b = Array1::<f64>::zeros(0);
    assert!(solve(&a, &b).unwrap().is_empty());
}

#[test]
fn test_larger_system_residual() {
    // diagonally dominant 8x8 system with solution 1..=8
    let n = 8;
    let mut a = Array2::from_elem((n, n), 0.0);
    for i in 0..n {
        for j in 0..n {
            a[[i, j]] = if i == j {
                10.0
            } else {
                1.0 / (1.0 + (i as f64 - j as f64).abs())
            };
        }
    }
    let x_true = Array1::from_iter((1..=n).map(|i| i as f64));
    let b = a.dot(&x_true);
    let x = solve_and_check_residual(&a, &b);
    for i in 0..n {
        assert_relative_eq!(x[i], x_true[i], epsilon = 1e-9);
    }
}
