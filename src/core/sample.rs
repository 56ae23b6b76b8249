use crate::error::StatError;
use serde::{Deserialize, Serialize};

/// Fixed-width numeric sample: a row-major matrix whose rows are points
/// sharing a single dimension.
///
/// This is the exchange type between the model-evaluation side (which
/// produces batches of output vectors) and the iterative estimators (which
/// absorb them). Rows are stored contiguously, so slicing a block of rows is
/// a cheap sub-slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    dimension: usize,
    data: Vec<f64>,
}

impl Sample {
    /// Creates an empty sample of points of the given dimension.
    pub fn new(dimension: usize) -> Result<Self, StatError> {
        if dimension == 0 {
            return Err(StatError::InvalidParameter(
                "sample dimension must be > 0".into(),
            ));
        }
        Ok(Self {
            dimension,
            data: Vec::new(),
        })
    }

    /// Builds a sample from explicit rows. Fails on ragged input or when
    /// `rows` is empty (the dimension would be undefined).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, StatError> {
        let Some(first) = rows.first() else {
            return Err(StatError::ShapeMismatch {
                reason: "cannot infer dimension from an empty row set".into(),
            });
        };
        let dimension = first.len();
        let mut sample = Sample::new(dimension)?;
        for row in rows {
            sample.push_row(row)?;
        }
        Ok(sample)
    }

    /// Builds a sample from a flat row-major buffer.
    pub fn from_flat(dimension: usize, data: Vec<f64>) -> Result<Self, StatError> {
        if dimension == 0 {
            return Err(StatError::InvalidParameter(
                "sample dimension must be > 0".into(),
            ));
        }
        if data.len() % dimension != 0 {
            return Err(StatError::ShapeMismatch {
                reason: format!(
                    "flat buffer of length {} is not a multiple of dimension {}",
                    data.len(),
                    dimension
                ),
            });
        }
        Ok(Self { dimension, data })
    }

    /// Appends one point. Fails on width mismatch without mutating.
    pub fn push_row(&mut self, row: &[f64]) -> Result<(), StatError> {
        if row.len() != self.dimension {
            return Err(StatError::DimensionMismatch {
                expected: self.dimension,
                actual: row.len(),
            });
        }
        self.data.extend_from_slice(row);
        Ok(())
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Width shared by every point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Borrows the `i`-th point.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Iterates over the points in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dimension)
    }

    /// Column means, or the zero vector for an empty sample.
    pub fn mean(&self) -> Vec<f64> {
        let mut mean = vec![0.0; self.dimension];
        if self.is_empty() {
            return mean;
        }
        for (k, row) in self.rows().enumerate() {
            let n = (k + 1) as f64;
            for (m, &x) in mean.iter_mut().zip(row) {
                *m += (x - *m) / n;
            }
        }
        mean
    }

    /// Returns a copy with every column shifted to zero mean.
    ///
    /// The Saltelli and Mauntz-Kucherenko accumulators expect their input
    /// centered this way; see the module docs of [`crate::sensitivity`].
    pub fn centered(&self) -> Sample {
        let mean = self.mean();
        let mut data = self.data.clone();
        for row in data.chunks_exact_mut(self.dimension) {
            for (x, m) in row.iter_mut().zip(&mean) {
                *x -= m;
            }
        }
        Sample {
            dimension: self.dimension,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Sample::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            StatError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            Sample::from_rows(&[]),
            Err(StatError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn from_flat_checks_divisibility() {
        assert!(Sample::from_flat(3, vec![0.0; 7]).is_err());
        let s = Sample::from_flat(3, vec![0.0; 9]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.dimension(), 3);
    }

    #[test]
    fn row_access_and_iteration_agree() {
        let s = Sample::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(s.row(1), &[3.0, 4.0]);
        let collected: Vec<&[f64]> = s.rows().collect();
        assert_eq!(collected, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }

    #[test]
    fn mean_and_centered() {
        let s = Sample::from_rows(&[vec![1.0, 10.0], vec![3.0, 30.0]]).unwrap();
        let mean = s.mean();
        assert!((mean[0] - 2.0).abs() < EPS);
        assert!((mean[1] - 20.0).abs() < EPS);

        let c = s.centered();
        assert!((c.row(0)[0] + 1.0).abs() < EPS);
        assert!((c.row(1)[1] - 10.0).abs() < EPS);
        let cm = c.mean();
        assert!(cm.iter().all(|m| m.abs() < EPS));
    }

    #[test]
    fn serde_round_trip() {
        let s = Sample::from_rows(&[vec![1.5, -2.5], vec![0.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
