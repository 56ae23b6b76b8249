use crate::core::Sample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws one standard-normal value via Box-Muller.
fn standard_normal(rng: &mut StdRng) -> f64 {
    // u1 in (0, 1] so the log is finite.
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Deterministic sample of iid standard-normal points.
pub fn normal_sample(dimension: usize, size: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..dimension * size)
        .map(|_| standard_normal(&mut rng))
        .collect();
    Sample::from_flat(dimension, data).unwrap()
}

/// `y = sum_i a_i * x_i`, the standard fixture for index accuracy tests:
/// with iid standard-normal inputs it has no interactions, so the exact
/// first-order and total-order indices coincide.
pub fn linear_model(coefficients: &[f64], x: &[f64]) -> f64 {
    coefficients.iter().zip(x).map(|(a, x)| a * x).sum()
}

/// Exact Sobol' indices of [`linear_model`] under iid standard-normal
/// inputs: `S_i = T_i = a_i^2 / sum_k a_k^2`.
pub fn exact_linear_indices(coefficients: &[f64]) -> Vec<f64> {
    let total: f64 = coefficients.iter().map(|a| a * a).sum();
    coefficients.iter().map(|a| a * a / total).collect()
}
