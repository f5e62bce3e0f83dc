//! Pure computation: sorting, ranking and the trend statistic.
//!
//! Everything here is free of I/O. The stages compose as
//! `sort_by_x` -> `average_ranks` -> `compute_statistic`.

pub mod rank;
pub mod rounding;
pub mod sort;
pub mod statistic;
pub mod types;

pub use rank::average_ranks;
pub use rounding::RoundingMode;
pub use sort::{sort_by_x, sort_permutation};
pub use statistic::{compute_statistic, partition_size};
pub use types::{Pair, Sample, StatisticReport};

/// Smallest sample the statistic accepts.
pub const MIN_PAIRS: usize = 9;
