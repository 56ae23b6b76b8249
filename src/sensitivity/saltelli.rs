use crate::core::Sample;
use crate::error::StatError;
use crate::sensitivity::accumulator::SobolAccumulator;
use crate::sensitivity::sobol_indices::SobolIndices;
use serde::{Deserialize, Serialize};

/// Streaming Saltelli estimator.
///
/// With `f0^2 = E[y_A] E[y_B]` and `V` the variance of `y_A`:
///
/// ```text
/// S_i = (E[y_B y_E_i] - f0^2) / V
/// T_i = 1 - (E[y_A y_E_i] - f0^2) / V
/// ```
///
/// The second moments are uncentered, so feed the design **centered**
/// (output minus its own mean, see [`Sample::centered`]) for accurate
/// estimates; centering is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaltelliSobolIndices {
    accumulator: SobolAccumulator,
}

impl SaltelliSobolIndices {
    pub fn new(input_dimension: usize, output_dimension: usize) -> Result<Self, StatError> {
        Ok(Self {
            accumulator: SobolAccumulator::new(input_dimension, output_dimension)?,
        })
    }
}

impl SobolIndices for SaltelliSobolIndices {
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
        acc.aggregate(|i, j| acc.moment_be(i, j) - acc.mean_a(j) * acc.mean_b(j))
    }

    fn total_order_indices(&self) -> Result<Vec<f64>, StatError> {
        let acc = &self.accumulator;
        acc.aggregate(|i, j| {
            acc.variance_a(j) - (acc.moment_ae(i, j) - acc.mean_a(j) * acc.mean_b(j))
        })
    }
}
