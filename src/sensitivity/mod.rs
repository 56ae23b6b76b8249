//! Streaming Sobol' sensitivity-index estimators.
//!
//! All four estimators consume the same pick-freeze design blocks (see
//! [`SobolAccumulator`](accumulator::SobolAccumulator) for the row layout)
//! and differ only in which pairwise column products feed the numerator and
//! denominator of the ratio estimate. Saltelli and Mauntz-Kucherenko work on
//! uncentered second moments and should be fed the output design minus its
//! own mean; Jansen and Martinez cancel a common shift by construction.

pub mod accumulator;
pub mod jansen;
pub mod martinez;
pub mod mauntz_kucherenko;
pub mod saltelli;
pub mod sobol_indices;

pub use jansen::JansenSobolIndices;
pub use martinez::MartinezSobolIndices;
pub use mauntz_kucherenko::MauntzKucherenkoSobolIndices;
pub use saltelli::SaltelliSobolIndices;
pub use sobol_indices::SobolIndices;
