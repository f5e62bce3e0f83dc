//! Monotone conjugation: a rank-based trend statistic for paired data.
//!
//! Pairs `(x, y)` are sorted by `x`, the `y` values are ranked with the
//! average tie method, and the rank sums of the trailing and leading thirds
//! are compared.
//!
//! ```rust
//! use conjugation::core::RoundingMode;
//! use conjugation::io::parse_pairs;
//! use conjugation::pipeline::compute;
//!
//! let sample = parse_pairs("1 3\n2 7\n3 1\n4 9\n5 2\n6 8\n7 4\n8 6\n9 5\n").unwrap();
//! let report = compute(&sample, RoundingMode::HalfEven).unwrap();
//! assert_eq!(report.summary(), (4, 7, 0.22));
//! ```

// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    average_ranks, compute_statistic, sort_by_x, Pair, RoundingMode, Sample, StatisticReport,
    MIN_PAIRS,
};
pub use crate::errors::{ConjugationError, Result};
pub use crate::io::OutputFormat;
pub use crate::pipeline::{compute, run, RunOptions};
