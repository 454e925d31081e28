//! QA suite for the Gaussian elimination solver
//!
//! Replays the reference systems end to end with a console observer, so
//! every pivot swap, normalization and row combination is visible, and
//! checks each outcome against its known classification.
//!
//! Usage:
//!     cargo run --bin qa-suite

use math_gauss::testdata;
use math_gauss::{
    solve_with, AugmentedSystem, EliminationObserver, EliminationStep, GaussConfig,
};
use ndarray::{Array1, Array2};

#[derive(Debug, Clone)]
enum Expected {
    Solution(Array1<f64>),
    Underdetermined,
    Inconsistent,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Solution(_) => write!(f, "unique solution"),
            Expected::Underdetermined => write!(f, "infinitely many solutions"),
            Expected::Inconsistent => write!(f, "no solution"),
        }
    }
}

/// Observer that prints each elimination step and the system it produced.
struct ConsoleReporter;

impl EliminationObserver<f64> for ConsoleReporter {
    fn on_step(&mut self, step: EliminationStep<f64>, system: &AugmentedSystem<f64>) {
        println!("{}", step);
        print!("{}", system);
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Starting math-gauss QA suite...");
    println!("===============================");

    let experiments = vec![
        ("underdetermined 3x3", testdata::underdetermined_3x3(), Expected::Underdetermined),
        ("inconsistent 3x3", testdata::inconsistent_3x3(), Expected::Inconsistent),
        (
            "well-posed 2x2",
            testdata::well_posed_2x2(),
            Expected::Solution(testdata::well_posed_2x2_solution()),
        ),
        (
            "well-posed 3x3",
            testdata::well_posed_3x3(),
            Expected::Solution(testdata::well_posed_3x3_solution()),
        ),
        (
            "well-posed 4x4",
            testdata::well_posed_4x4(),
            Expected::Solution(testdata::well_posed_4x4_solution()),
        ),
    ];

    let mut failed = false;
    for (index, (name, (a, b), expected)) in experiments.into_iter().enumerate() {
        println!("\nExperiment #{}: {} (expected: {})", index, name, expected);
        if !run_experiment(&a, &b, &expected)? {
            eprintln!("EXPERIMENT FAILED: {}", name);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    } else {
        println!("\nALL EXPERIMENTS PASSED");
        Ok(())
    }
}

/// Solve one reference system with full tracing and compare the outcome
/// against its expected classification.
fn run_experiment(a: &Array2<f64>, b: &Array1<f64>, expected: &Expected) -> anyhow::Result<bool> {
    println!("Input system:");
    print!("{}", AugmentedSystem::new(a, b)?);
    println!();

    let result = solve_with(a, b, &GaussConfig::default(), &mut ConsoleReporter);
    let passed = match (result, expected) {
        (Ok(x), Expected::Solution(reference)) => {
            println!("Answer:");
            for (i, xi) in x.iter().enumerate() {
                println!("x{} = {:7.4}", i, xi);
            }
            let deviation = x
                .iter()
                .zip(reference.iter())
                .map(|(xi, ri)| (xi - ri).abs())
                .fold(0.0_f64, f64::max);
            if deviation > 0.01 {
                eprintln!("largest deviation from reference: {:.2e}", deviation);
                false
            } else {
                true
            }
        }
        (Ok(_), _) => {
            eprintln!("a degenerate reference system produced a solution");
            false
        }
        (Err(err), Expected::Underdetermined) if err.is_infinite_solutions() => {
            println!("{}", err);
            true
        }
        (Err(err), Expected::Inconsistent) if err.is_no_solution() => {
            println!("{}", err);
            true
        }
        (Err(err), _) => {
            eprintln!("unexpected outcome: {}", err);
            false
        }
    };
    Ok(passed)
}
