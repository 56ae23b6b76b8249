use crate::core::Sample;
use crate::error::StatError;

/// Capability interface of the streaming moment estimators.
///
/// Implementations absorb fixed-dimension points one at a time via
/// [`increment`](IterativeStatistic::increment) and never retain past
/// observations; the current estimate can be read at any time through the
/// type's own getters. [`increment_sample`](IterativeStatistic::increment_sample)
/// folds the single-point update over a batch, so feeding a sequence in one
/// batch or point by point produces the exact same state.
///
/// Not synchronized: callers may evaluate batches in parallel but must
/// serialize the increment calls on a shared instance.
pub trait IterativeStatistic {
    /// Fixed point width, set at construction.
    fn dimension(&self) -> usize;

    /// Total count of points absorbed so far.
    fn iteration(&self) -> u64;

    /// Absorbs one point. Fails with [`StatError::DimensionMismatch`]
    /// without mutating any state when the width disagrees.
    fn increment(&mut self, point: &[f64]) -> Result<(), StatError>;

    /// Absorbs every point of `sample` in row order.
    ///
    /// The whole batch is validated up front, so a width mismatch leaves the
    /// accumulator untouched rather than half-updated.
    fn increment_sample(&mut self, sample: &Sample) -> Result<(), StatError> {
        if sample.dimension() != self.dimension() {
            return Err(StatError::DimensionMismatch {
                expected: self.dimension(),
                actual: sample.dimension(),
            });
        }
        for row in sample.rows() {
            self.increment(row)?;
        }
        Ok(())
    }
}
