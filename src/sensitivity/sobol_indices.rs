use crate::core::Sample;
use crate::error::StatError;

/// Capability interface of the streaming Sobol' index estimators.
///
/// An implementation absorbs pick-freeze design blocks through
/// [`increment_indices`](SobolIndices::increment_indices) and can be asked
/// for the current first-order and total-order point estimates at any time,
/// with no replay of past blocks. Blocks of different sizes may be mixed
/// freely; the estimate only depends on the multiset of absorbed rows.
///
/// For several outputs (`output_dimension() > 1`) the getters return the
/// aggregated index across outputs: the per-output numerators are rescaled
/// to variance units and pooled, `S_i = sum_j num_ij / sum_j Var_j`.
///
/// Point estimates only; confidence intervals belong to the batch
/// algorithms, which keep the full sample.
pub trait SobolIndices {
    /// Number of model inputs `p`, fixed at construction.
    fn input_dimension(&self) -> usize;

    /// Number of model outputs `q`, fixed at construction.
    fn output_dimension(&self) -> usize;

    /// Total base-sample rows absorbed (the sum of the block sizes `m`).
    fn iteration(&self) -> u64;

    /// Absorbs one design block of `(p + 2) * m` output rows.
    ///
    /// Fails with [`StatError::ShapeMismatch`] (and mutates nothing) when
    /// the row count is not a positive multiple of `p + 2` or the output
    /// width differs from `q`.
    fn increment_indices(&mut self, output_design: &Sample) -> Result<(), StatError>;

    /// Current first-order indices, one per input.
    ///
    /// Fails with [`StatError::InsufficientData`] while fewer than two base
    /// rows have been absorbed, and with [`StatError::DegenerateData`] when
    /// every output is flat.
    fn first_order_indices(&self) -> Result<Vec<f64>, StatError>;

    /// Current total-order indices, one per input. Failure modes as in
    /// [`first_order_indices`](SobolIndices::first_order_indices).
    fn total_order_indices(&self) -> Result<Vec<f64>, StatError>;
}
