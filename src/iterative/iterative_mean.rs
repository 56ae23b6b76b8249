use crate::error::StatError;
use crate::iterative::IterativeStatistic;
use serde::{Deserialize, Serialize};

/// Streaming mean of fixed-dimension points.
///
/// Maintains `mu += (x - mu) / (n + 1)` per component, the numerically
/// stable running-mean recurrence. While no point has been absorbed,
/// [`mean`](IterativeMean::mean) returns the zero vector (the accumulator's
/// initial state) rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterativeMean {
    dimension: usize,
    iteration: u64,
    mean: Vec<f64>,
}

impl IterativeMean {
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
        })
    }

    /// Current mean estimate; the zero vector while `iteration() == 0`.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }
}

impl IterativeStatistic for IterativeMean {
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
        for (m, &x) in self.mean.iter_mut().zip(point) {
            *m += (x - *m) / n;
        }
        self.iteration += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sample;
    use crate::testing::models::normal_sample;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn rejects_zero_dimension() {
        assert!(IterativeMean::new(0).is_err());
    }

    #[test]
    fn starts_at_zero() {
        let mean = IterativeMean::new(3).unwrap();
        assert_eq!(mean.iteration(), 0);
        assert_eq!(mean.mean(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_point_sets_mean() {
        let mut mean = IterativeMean::new(2).unwrap();
        mean.increment(&[4.0, -2.0]).unwrap();
        assert_eq!(mean.iteration(), 1);
        assert!(approx_eq(mean.mean()[0], 4.0, EPS));
        assert!(approx_eq(mean.mean()[1], -2.0, EPS));
    }

    #[test]
    fn matches_naive_mean() {
        let sample = normal_sample(3, 200, 7);
        let mut mean = IterativeMean::new(3).unwrap();
        for row in sample.rows() {
            mean.increment(row).unwrap();
        }
        let naive = sample.mean();
        for (a, b) in mean.mean().iter().zip(&naive) {
            assert!(approx_eq(*a, *b, EPS));
        }
    }

    #[test]
    fn batch_and_sequential_agree() {
        let sample = normal_sample(4, 120, 11);
        let mut one_by_one = IterativeMean::new(4).unwrap();
        for row in sample.rows() {
            one_by_one.increment(row).unwrap();
        }
        let mut batched = IterativeMean::new(4).unwrap();
        batched.increment_sample(&sample).unwrap();

        assert_eq!(one_by_one.iteration(), batched.iteration());
        for (a, b) in one_by_one.mean().iter().zip(batched.mean()) {
            assert!(approx_eq(*a, *b, EPS));
        }
    }

    #[test]
    fn mixed_increments_count_every_point() {
        // 50 single increments followed by a 50-point batch.
        let sample = normal_sample(5, 100, 3);
        let mut mean = IterativeMean::new(5).unwrap();
        for i in 0..50 {
            mean.increment(sample.row(i)).unwrap();
        }
        let tail: Vec<Vec<f64>> = (50..100).map(|i| sample.row(i).to_vec()).collect();
        mean.increment_sample(&Sample::from_rows(&tail).unwrap())
            .unwrap();

        assert_eq!(mean.iteration(), 100);
        for (a, b) in mean.mean().iter().zip(&sample.mean()) {
            assert!(approx_eq(*a, *b, EPS));
        }
    }

    #[test]
    fn dimension_mismatch_leaves_state_untouched() {
        let mut mean = IterativeMean::new(5).unwrap();
        mean.increment(&[1.0; 5]).unwrap();
        let before = mean.clone();

        let err = mean.increment(&[1.0; 4]).unwrap_err();
        assert_eq!(
            err,
            StatError::DimensionMismatch {
                expected: 5,
                actual: 4
            }
        );
        assert_eq!(mean, before);

        let bad = Sample::from_rows(&[vec![0.0; 4]]).unwrap();
        assert!(mean.increment_sample(&bad).is_err());
        assert_eq!(mean, before);
    }

    #[test]
    fn serde_round_trip_preserves_state() {
        let sample = normal_sample(2, 30, 19);
        let mut mean = IterativeMean::new(2).unwrap();
        mean.increment_sample(&sample).unwrap();

        let json = serde_json::to_string(&mean).unwrap();
        let back: IterativeMean = serde_json::from_str(&json).unwrap();
        assert_eq!(mean, back);
    }
}
