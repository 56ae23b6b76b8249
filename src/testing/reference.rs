//! Closed-form batch statistics used as oracles by the streaming tests.
//!
//! Everything here recomputes from the retained sample with the textbook
//! two-pass formulas, deliberately sharing no code with the accumulators.

use crate::core::Sample;

/// Two-pass column means.
pub fn naive_mean(sample: &Sample) -> Vec<f64> {
    let n = sample.len() as f64;
    let mut sums = vec![0.0; sample.dimension()];
    for row in sample.rows() {
        for (s, &x) in sums.iter_mut().zip(row) {
            *s += x;
        }
    }
    sums.into_iter().map(|s| s / n).collect()
}

/// Two-pass unbiased column variances, `sum (x - mean)^2 / (n - 1)`.
pub fn naive_variance(sample: &Sample) -> Vec<f64> {
    let n = sample.len() as f64;
    let mean = naive_mean(sample);
    let mut sq = vec![0.0; sample.dimension()];
    for row in sample.rows() {
        for ((s, &x), m) in sq.iter_mut().zip(row).zip(&mean) {
            *s += (x - m) * (x - m);
        }
    }
    sq.into_iter().map(|s| s / (n - 1.0)).collect()
}

/// Which batch formula to apply in [`batch_sobol_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchEstimator {
    Saltelli,
    Jansen,
    Martinez,
    MauntzKucherenko,
}

fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

fn population_variance(v: &[f64]) -> f64 {
    let m = mean(v);
    v.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / v.len() as f64
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let (ma, mb) = (mean(a), mean(b));
    let cov = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - ma) * (y - mb))
        .sum::<f64>()
        / a.len() as f64;
    cov / (population_variance(a) * population_variance(b)).sqrt()
}

/// Classical batch Sobol' estimates for a single-output pick-freeze design
/// of `(p + 2) * m` rows laid out as A, B, E_1 .. E_p.
///
/// Returns `(first_order, total_order)`, each of length `p`. Saltelli and
/// Mauntz-Kucherenko expect the design centered, like their streaming
/// counterparts.
pub fn batch_sobol_indices(
    output_design: &Sample,
    p: usize,
    kind: BatchEstimator,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(output_design.dimension(), 1, "single-output oracle");
    let m = output_design.len() / (p + 2);
    let column = |g: usize| -> Vec<f64> { (0..m).map(|k| output_design.row(g * m + k)[0]).collect() };

    let ya = column(0);
    let yb = column(1);
    let n = m as f64;
    let variance = population_variance(&ya);
    let f0_sq = mean(&ya) * mean(&yb);

    let mut first = Vec::with_capacity(p);
    let mut total = Vec::with_capacity(p);
    for i in 0..p {
        let ye = column(2 + i);
        let dot = |u: &[f64], v: &[f64]| u.iter().zip(v).map(|(x, y)| x * y).sum::<f64>() / n;
        match kind {
            BatchEstimator::Saltelli => {
                first.push((dot(&yb, &ye) - f0_sq) / variance);
                total.push(1.0 - (dot(&ya, &ye) - f0_sq) / variance);
            }
            BatchEstimator::Jansen => {
                let sq = |u: &[f64], v: &[f64]| {
                    u.iter().zip(v).map(|(x, y)| (x - y) * (x - y)).sum::<f64>() / n
                };
                first.push(1.0 - sq(&yb, &ye) / (2.0 * variance));
                total.push(sq(&ya, &ye) / (2.0 * variance));
            }
            BatchEstimator::Martinez => {
                first.push(pearson(&yb, &ye));
                total.push(1.0 - pearson(&ya, &ye));
            }
            BatchEstimator::MauntzKucherenko => {
                first.push((dot(&yb, &ye) - dot(&ya, &yb)) / variance);
                total.push((dot(&ya, &ya) - dot(&ya, &ye)) / variance);
            }
        }
    }
    (first, total)
}
