use crate::core::Sample;
use crate::error::StatError;
use crate::sensitivity::accumulator::SobolAccumulator;
use crate::sensitivity::sobol_indices::SobolIndices;
use serde::{Deserialize, Serialize};

/// Streaming Jansen estimator.
///
/// Built on mean squared differences between column groups, with `V` the
/// variance of `y_A`:
///
/// ```text
/// S_i = 1 - E[(y_B - y_E_i)^2] / (2 V)
/// T_i = E[(y_A - y_E_i)^2] / (2 V)
/// ```
///
/// The squared differences cancel any common shift, so the design does not
/// need to be centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JansenSobolIndices {
    accumulator: SobolAccumulator,
}

impl JansenSobolIndices {
    pub fn new(input_dimension: usize, output_dimension: usize) -> Result<Self, StatError> {
        Ok(Self {
            accumulator: SobolAccumulator::new(input_dimension, output_dimension)?,
        })
    }
}

impl SobolIndices for JansenSobolIndices {
    #[inline]
    fn input_dimension(&self) -> usize {
        self.accumulator.input_dimension()
    }

    #[inline]
    fn output_dimension(&self) -> usize {
        self.accumulator.output_dimension()
    }

    #[inline]
    fn iteration(&self) -> u64 {
        self.accumulator.iteration()
    }

    fn increment_indices(&mut self, output_design: &Sample) -> Result<(), StatError> {
        self.accumulator.increment(output_design)
    }

    fn first_order_indices(&self) -> Result<Vec<f64>, StatError> {
        let acc = &self.accumulator;
        acc.aggregate(|i, j| {
            let sq_diff =
                acc.moment_bb(j) - 2.0 * acc.moment_be(i, j) + acc.moment_ee(i, j);
            acc.variance_a(j) - sq_diff / 2.0
        })
    }

    fn total_order_indices(&self) -> Result<Vec<f64>, StatError> {
        let acc = &self.accumulator;
        acc.aggregate(|i, j| {
            (acc.moment_aa(j) - 2.0 * acc.moment_ae(i, j) + acc.moment_ee(i, j)) / 2.0
        })
    }
}
