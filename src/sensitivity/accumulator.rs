use crate::core::Sample;
use crate::error::StatError;
use serde::{Deserialize, Serialize};

/// Running sums over the pick-freeze column groups, shared by every
/// estimator of the family.
///
/// A design block of size `m` holds `(p + 2) * m` rows of `q`-vectors in the
/// layout the pick-freeze experiment emits them: `m` rows of `y_A`, `m` rows
/// of `y_B`, then `m` rows of `y_{E_i}` for each input `i` in order. Each
/// call to [`increment`](SobolAccumulator::increment) folds one such block
/// into the sums; the estimator formulas are closed forms over these sums,
/// so the streaming estimate equals the batch estimate on the same
/// accumulated data no matter how the rows were split across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SobolAccumulator {
    input_dimension: usize,
    output_dimension: usize,
    /// Base-sample rows absorbed so far (sum of the block sizes `m`).
    iteration: u64,
    // Indexed by output j.
    sum_a: Vec<f64>,
    sum_b: Vec<f64>,
    sum_aa: Vec<f64>,
    sum_bb: Vec<f64>,
    sum_ab: Vec<f64>,
    // Indexed by input i * q + output j.
    sum_e: Vec<f64>,
    sum_ee: Vec<f64>,
    sum_ae: Vec<f64>,
    sum_be: Vec<f64>,
}

impl SobolAccumulator {
    pub fn new(input_dimension: usize, output_dimension: usize) -> Result<Self, StatError> {
        if input_dimension == 0 {
            return Err(StatError::InvalidParameter(
                "input dimension must be > 0".into(),
            ));
        }
        if output_dimension == 0 {
            return Err(StatError::InvalidParameter(
                "output dimension must be > 0".into(),
            ));
        }
        let pq = input_dimension * output_dimension;
        Ok(Self {
            input_dimension,
            output_dimension,
            iteration: 0,
            sum_a: vec![0.0; output_dimension],
            sum_b: vec![0.0; output_dimension],
            sum_aa: vec![0.0; output_dimension],
            sum_bb: vec![0.0; output_dimension],
            sum_ab: vec![0.0; output_dimension],
            sum_e: vec![0.0; pq],
            sum_ee: vec![0.0; pq],
            sum_ae: vec![0.0; pq],
            sum_be: vec![0.0; pq],
        })
    }

    #[inline]
    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    #[inline]
    pub fn output_dimension(&self) -> usize {
        self.output_dimension
    }

    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Folds one design block into the running sums.
    ///
    /// Validates the whole block before touching any state, so a shape
    /// mismatch never leaves the sums half-updated.
    pub fn increment(&mut self, output_design: &Sample) -> Result<(), StatError> {
        if output_design.dimension() != self.output_dimension {
            return Err(StatError::ShapeMismatch {
                reason: format!(
                    "output width {} does not match output dimension {}",
                    output_design.dimension(),
                    self.output_dimension
                ),
            });
        }
        let groups = self.input_dimension + 2;
        let rows = output_design.len();
        if rows == 0 || rows % groups != 0 {
            return Err(StatError::ShapeMismatch {
                reason: format!(
                    "design block of {rows} rows is not a positive multiple of p + 2 = {groups}"
                ),
            });
        }
        let m = rows / groups;
        let q = self.output_dimension;

        for k in 0..m {
            let ya = output_design.row(k);
            let yb = output_design.row(m + k);
            for j in 0..q {
                self.sum_a[j] += ya[j];
                self.sum_b[j] += yb[j];
                self.sum_aa[j] += ya[j] * ya[j];
                self.sum_bb[j] += yb[j] * yb[j];
                self.sum_ab[j] += ya[j] * yb[j];
            }
            for i in 0..self.input_dimension {
                let ye = output_design.row((2 + i) * m + k);
                for j in 0..q {
                    let ij = i * q + j;
                    self.sum_e[ij] += ye[j];
                    self.sum_ee[ij] += ye[j] * ye[j];
                    self.sum_ae[ij] += ya[j] * ye[j];
                    self.sum_be[ij] += yb[j] * ye[j];
                }
            }
        }
        self.iteration += m as u64;
        Ok(())
    }

    /// Fails unless at least two base rows have been absorbed (the reference
    /// variance is undefined below that).
    pub fn check_query(&self) -> Result<(), StatError> {
        if self.iteration < 2 {
            return Err(StatError::InsufficientData {
                required: 2,
                actual: self.iteration,
            });
        }
        Ok(())
    }

    #[inline]
    fn n(&self) -> f64 {
        self.iteration as f64
    }

    #[inline]
    pub fn mean_a(&self, j: usize) -> f64 {
        self.sum_a[j] / self.n()
    }

    #[inline]
    pub fn mean_b(&self, j: usize) -> f64 {
        self.sum_b[j] / self.n()
    }

    #[inline]
    pub fn mean_e(&self, i: usize, j: usize) -> f64 {
        self.sum_e[i * self.output_dimension + j] / self.n()
    }

    /// Population variance of the `y_A` column group for output `j`; this is
    /// the reference variance of every ratio estimator.
    #[inline]
    pub fn variance_a(&self, j: usize) -> f64 {
        let mean = self.mean_a(j);
        self.sum_aa[j] / self.n() - mean * mean
    }

    #[inline]
    pub fn variance_b(&self, j: usize) -> f64 {
        let mean = self.mean_b(j);
        self.sum_bb[j] / self.n() - mean * mean
    }

    #[inline]
    pub fn variance_e(&self, i: usize, j: usize) -> f64 {
        let mean = self.mean_e(i, j);
        self.sum_ee[i * self.output_dimension + j] / self.n() - mean * mean
    }

    /// `E[y_A y_B]` for output `j` (uncentered second moment).
    #[inline]
    pub fn moment_ab(&self, j: usize) -> f64 {
        self.sum_ab[j] / self.n()
    }

    /// `E[y_A y_A]` for output `j`.
    #[inline]
    pub fn moment_aa(&self, j: usize) -> f64 {
        self.sum_aa[j] / self.n()
    }

    /// `E[y_B y_B]` for output `j`.
    #[inline]
    pub fn moment_bb(&self, j: usize) -> f64 {
        self.sum_bb[j] / self.n()
    }

    /// `E[y_E_i y_E_i]` for output `j`.
    #[inline]
    pub fn moment_ee(&self, i: usize, j: usize) -> f64 {
        self.sum_ee[i * self.output_dimension + j] / self.n()
    }

    /// `E[y_A y_E_i]` for output `j`.
    #[inline]
    pub fn moment_ae(&self, i: usize, j: usize) -> f64 {
        self.sum_ae[i * self.output_dimension + j] / self.n()
    }

    /// `E[y_B y_E_i]` for output `j`.
    #[inline]
    pub fn moment_be(&self, i: usize, j: usize) -> f64 {
        self.sum_be[i * self.output_dimension + j] / self.n()
    }

    /// Pearson correlation between the `y_B` and `y_{E_i}` columns.
    /// Returns 0 when either side has no spread.
    pub fn correlation_be(&self, i: usize, j: usize) -> f64 {
        let cov = self.moment_be(i, j) - self.mean_b(j) * self.mean_e(i, j);
        let denom = (self.variance_b(j).max(0.0) * self.variance_e(i, j).max(0.0)).sqrt();
        if denom > 0.0 { cov / denom } else { 0.0 }
    }

    /// Pearson correlation between the `y_A` and `y_{E_i}` columns.
    /// Returns 0 when either side has no spread.
    pub fn correlation_ae(&self, i: usize, j: usize) -> f64 {
        let cov = self.moment_ae(i, j) - self.mean_a(j) * self.mean_e(i, j);
        let denom = (self.variance_a(j).max(0.0) * self.variance_e(i, j).max(0.0)).sqrt();
        if denom > 0.0 { cov / denom } else { 0.0 }
    }

    /// Aggregates per-output index numerators (in variance units) into one
    /// index per input: `S_i = sum_j num_ij / sum_j Var_j`.
    ///
    /// Outputs with no spread contribute to neither side; if every output is
    /// flat the indices are undefined and the call fails.
    pub fn aggregate<F>(&self, numerator: F) -> Result<Vec<f64>, StatError>
    where
        F: Fn(usize, usize) -> f64,
    {
        self.check_query()?;
        let mut total_variance = 0.0;
        let mut sums = vec![0.0; self.input_dimension];
        for j in 0..self.output_dimension {
            let variance = self.variance_a(j);
            if variance <= 0.0 {
                continue;
            }
            total_variance += variance;
            for (i, sum) in sums.iter_mut().enumerate() {
                *sum += numerator(i, j);
            }
        }
        if total_variance <= 0.0 {
            return Err(StatError::DegenerateData(
                "output variance is zero, indices are undefined".into(),
            ));
        }
        Ok(sums.into_iter().map(|s| s / total_variance).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::design::linear_output_design;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(SobolAccumulator::new(0, 1).is_err());
        assert!(SobolAccumulator::new(3, 0).is_err());
    }

    #[test]
    fn rejects_wrong_multiple_of_groups() {
        let mut acc = SobolAccumulator::new(3, 1).unwrap();
        // p + 2 = 5 groups; 7 rows is not a multiple.
        let block = Sample::from_rows(&vec![vec![0.0]; 7]).unwrap();
        let before = acc.clone();
        assert!(matches!(
            acc.increment(&block),
            Err(StatError::ShapeMismatch { .. })
        ));
        assert_eq!(acc, before);
    }

    #[test]
    fn rejects_wrong_output_width() {
        let mut acc = SobolAccumulator::new(2, 2).unwrap();
        let block = Sample::from_rows(&vec![vec![0.0]; 4]).unwrap();
        assert!(acc.increment(&block).is_err());
        assert_eq!(acc.iteration(), 0);
    }

    #[test]
    fn iteration_counts_base_rows() {
        let mut acc = SobolAccumulator::new(4, 1).unwrap();
        let block = linear_output_design(&[1.0, 1.0, 1.0, 1.0], 10, 0);
        acc.increment(&block).unwrap();
        assert_eq!(acc.iteration(), 10);
        acc.increment(&block).unwrap();
        assert_eq!(acc.iteration(), 20);
    }

    #[test]
    fn query_before_two_rows_fails() {
        let acc = SobolAccumulator::new(2, 1).unwrap();
        assert!(matches!(
            acc.check_query(),
            Err(StatError::InsufficientData { .. })
        ));
    }

    #[test]
    fn aggregate_rejects_flat_output() {
        let mut acc = SobolAccumulator::new(2, 1).unwrap();
        let block = Sample::from_rows(&vec![vec![3.5]; 8]).unwrap();
        acc.increment(&block).unwrap();
        assert!(matches!(
            acc.aggregate(|_, _| 0.0),
            Err(StatError::DegenerateData(_))
        ));
    }
}
