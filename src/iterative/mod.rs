pub mod iterative_mean;
pub mod iterative_statistic;
pub mod iterative_variance;

pub use iterative_mean::IterativeMean;
pub use iterative_statistic::IterativeStatistic;
pub use iterative_variance::IterativeVariance;
