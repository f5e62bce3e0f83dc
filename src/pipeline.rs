//! Load -> sort -> rank -> compute -> write.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::core::{self, RoundingMode, Sample, StatisticReport, MIN_PAIRS};
use crate::errors::{ConjugationError, Result};
use crate::io::{self, OutputDestination, OutputFormat};

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub rounding: RoundingMode,
}

/// Load pairs from `path` and order them by ascending x.
pub fn load_sorted(path: &Path) -> Result<Sample> {
    let sample = io::read_sample(path)?;
    Ok(core::sort_by_x(&sample))
}

/// Compute the statistic for a sample in any order.
pub fn compute(sample: &Sample, rounding: RoundingMode) -> Result<StatisticReport> {
    compute_sorted(&core::sort_by_x(sample), rounding)
}

/// Compute the statistic for a sample already ordered by ascending x.
pub fn compute_sorted(sorted: &Sample, rounding: RoundingMode) -> Result<StatisticReport> {
    if sorted.len() < MIN_PAIRS {
        return Err(ConjugationError::sample_size(sorted.len()));
    }

    let ranks = core::average_ranks(sorted.ys());
    debug!(pairs = sorted.len(), "ranked y values");
    core::compute_statistic(&ranks, rounding)
}

/// Run the pipeline, sending output to `destination`.
///
/// Nothing is written unless every earlier stage succeeded.
pub fn run_to(
    options: &RunOptions,
    destination: &dyn OutputDestination,
) -> Result<StatisticReport> {
    let _span = info_span!("conjugation", input = %options.input.display()).entered();

    let sorted = load_sorted(&options.input)?;
    let report = compute_sorted(&sorted, options.rounding)?;
    io::write_report(destination, &report, options.format)?;

    info!(
        n = report.n,
        difference = report.difference,
        standard_error = report.standard_error,
        conjugation_measure = report.conjugation_measure,
        destination = %destination.description(),
        "conjugation statistic written"
    );
    Ok(report)
}

/// Run the pipeline against the output path in `options`.
pub fn run(options: &RunOptions) -> Result<StatisticReport> {
    let destination = io::destination_for(&options.output);
    run_to(options, destination.as_ref())
}
