use crate::core::Sample;
use crate::error::StatError;
use crate::sensitivity::accumulator::SobolAccumulator;
use crate::sensitivity::sobol_indices::SobolIndices;
use serde::{Deserialize, Serialize};

/// Streaming Mauntz-Kucherenko estimator.
///
/// With `V` the variance of `y_A`:
///
/// ```text
/// S_i = E[y_B (y_E_i - y_A)] / V
/// T_i = E[y_A (y_A - y_E_i)] / V
/// ```
///
/// Like Saltelli, the second moments are uncentered: feed the design
/// **centered** ([`Sample::centered`]) for accurate estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MauntzKucherenkoSobolIndices {
    accumulator: SobolAccumulator,
}

impl MauntzKucherenkoSobolIndices {
    pub fn new(input_dimension: usize, output_dimension: usize) -> Result<Self, StatError> {
        Ok(Self {
            accumulator: SobolAccumulator::new(input_dimension, output_dimension)?,
        })
    }
}

impl SobolIndices for MauntzKucherenkoSobolIndices {
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
        acc.aggregate(|i, j| acc.moment_be(i, j) - acc.moment_ab(j))
    }

    fn total_order_indices(&self) -> Result<Vec<f64>, StatError> {
        let acc = &self.accumulator;
        acc.aggregate(|i, j| acc.moment_aa(j) - acc.moment_ae(i, j))
    }
}
