use crate::error::StatError;
use crate::iterative::IterativeStatistic;
use serde::{Deserialize, Serialize};

/// Streaming per-component mean and variance of fixed-dimension points.
///
/// Implements Welford's one-pass recurrence generalized to vectors: for each
/// component, `delta = x - mu; mu += delta / n; m2 += delta * (x - mu)`.
/// Only the diagonal of the covariance matrix is tracked.
///
/// [`variance`](IterativeVariance::variance) uses the unbiased `m2 / (n - 1)`
/// convention and requires at least two absorbed points. Tiny negative `m2`
/// values from floating-point cancellation are clamped to zero, so no getter
/// can return a negative variance or a NaN standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterativeVariance {
    dimension: usize,
    iteration: u64,
    mean: Vec<f64>,
    m2: Vec<f64>,
}

impl IterativeVariance {
    pub fn new(dimension: usize) -> Result<Self, StatError> {
        if dimension == 0 {
            return Err(StatError::InvalidParameter(
                "dimension must be > 0".into(),
            ));
        }
        Ok(Self {
            dimension,
            iteration: 0,
            mean: vec![0.0; dimension],
            m2: vec![0.0; dimension],
        })
    }

    /// Current mean estimate; the zero vector while `iteration() == 0`.
    ///
    /// Matches [`IterativeMean::mean`](crate::iterative::IterativeMean::mean)
    /// exactly when both were fed the identical sequence.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Unbiased per-component variance, `m2 / (n - 1)`.
    ///
    /// Fails with [`StatError::InsufficientData`] while fewer than two
    /// points have been absorbed.
    pub fn variance(&self) -> Result<Vec<f64>, StatError> {
        if self.iteration < 2 {
            return Err(StatError::InsufficientData {
                required: 2,
                actual: self.iteration,
            });
        }
        let denom = (self.iteration - 1) as f64;
        Ok(self.m2.iter().map(|m2| m2.max(0.0) / denom).collect())
    }

    /// Element-wise square root of [`variance`](IterativeVariance::variance).
    pub fn standard_deviation(&self) -> Result<Vec<f64>, StatError> {
        Ok(self.variance()?.into_iter().map(f64::sqrt).collect())
    }

    /// Per-component coefficient of variation, `sigma / mu`.
    ///
    /// Components with a zero mean yield `NaN` (the ratio is undefined
    /// there, not an error of the accumulator).
    pub fn coefficient_of_variation(&self) -> Result<Vec<f64>, StatError> {
        let sigma = self.standard_deviation()?;
        Ok(sigma
            .into_iter()
            .zip(&self.mean)
            .map(|(s, &m)| if m == 0.0 { f64::NAN } else { s / m })
            .collect())
    }
}

impl IterativeStatistic for IterativeVariance {
    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn iteration(&self) -> u64 {
        self.iteration
    }

    fn increment(&mut self, point: &[f64]) -> Result<(), StatError> {
        if point.len() != self.dimension {
            return Err(StatError::DimensionMismatch {
                expected: self.dimension,
                actual: point.len(),
            });
        }
        let n = (self.iteration + 1) as f64;
        for ((m, m2), &x) in self.mean.iter_mut().zip(self.m2.iter_mut()).zip(point) {
            let delta = x - *m;
            *m += delta / n;
            *m2 += delta * (x - *m);
        }
        self.iteration += 1;
        Ok(())
    }
}
