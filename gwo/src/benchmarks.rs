//! Standard test functions for evaluating the optimizer
//!
//! All of them are minimization problems with a known global minimum, which
//! makes them useful objectives for the test suite and the demos.

use std::f64::consts::PI;

/// Sphere function, unimodal and separable
///
/// Global minimum: f(0, ..., 0) = 0
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock function, unimodal and non-separable
///
/// Global minimum: f(1, ..., 1) = 0, inside a long flat valley
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Rastrigin function, multimodal and separable
///
/// Global minimum: f(0, ..., 0) = 0, surrounded by a lattice of local minima
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}
