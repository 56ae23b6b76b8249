use crate::core::Sample;
use crate::error::StatError;
use crate::sensitivity::accumulator::SobolAccumulator;
use crate::sensitivity::sobol_indices::SobolIndices;
use serde::{Deserialize, Serialize};

/// Streaming Martinez estimator.
///
/// Correlation-based:
///
/// ```text
/// S_i = rho(y_B, y_E_i)
/// T_i = 1 - rho(y_A, y_E_i)
/// ```
///
/// Pearson correlations center internally, so the design may be fed raw;
/// this is the variant of the family that tolerates uncentered input best.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MartinezSobolIndices {
    accumulator: SobolAccumulator,
}

impl MartinezSobolIndices {
    pub fn new(input_dimension: usize, output_dimension: usize) -> Result<Self, StatError> {
        Ok(Self {
            accumulator: SobolAccumulator::new(input_dimension, output_dimension)?,
        })
    }
}

impl SobolIndices for MartinezSobolIndices {
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
        acc.aggregate(|i, j| acc.correlation_be(i, j) * acc.variance_a(j))
    }

    fn total_order_indices(&self) -> Result<Vec<f64>, StatError> {
        let acc = &self.accumulator;
        acc.aggregate(|i, j| (1.0 - acc.correlation_ae(i, j)) * acc.variance_a(j))
    }
}
