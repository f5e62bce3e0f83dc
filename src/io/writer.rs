//! Rendering a [`StatisticReport`].
//!
//! The text format is the single line `<difference> <standard_error>
//! <measure>\n` with the measure printed to two decimals. The JSON format
//! carries the whole report including the partition sums.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::destinations::OutputDestination;
use crate::core::StatisticReport;
use crate::errors::Result;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `difference standard_error measure` on one line
    #[default]
    Text,
    /// Full report as a JSON object
    Json,
}

pub fn format_text_line(report: &StatisticReport) -> String {
    format!(
        "{} {} {:.2}\n",
        report.difference, report.standard_error, report.conjugation_measure
    )
}

pub fn render(report: &StatisticReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text_line(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render `report` and hand it to `destination` in one write.
pub fn write_report(
    destination: &dyn OutputDestination,
    report: &StatisticReport,
    format: OutputFormat,
) -> Result<()> {
    let content = render(report, format)?;
    destination.write_str(&content)?;
    destination.flush()?;
    debug!(destination = %destination.description(), ?format, "wrote report");
    Ok(())
}
