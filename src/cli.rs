use clap::Parser;
use std::path::PathBuf;

use crate::config::ConjugationConfig;
use crate::core::RoundingMode;
use crate::io::OutputFormat;
use crate::pipeline::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "conjugation")]
#[command(
    about = "Monotone conjugation trend statistic for paired observations",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Input file: one `x y` integer pair per line
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (`-` for stdout)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Tie handling for every rounding step
    #[arg(long, value_enum)]
    pub rounding: Option<RoundingMode>,

    /// Configuration file (defaults to searching for .conjugation.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Merge flags over file configuration; flags win.
    pub fn run_options(&self, config: &ConjugationConfig) -> RunOptions {
        RunOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            format: self.format.unwrap_or(config.output.format),
            rounding: self.rounding.unwrap_or(config.statistic.rounding),
        }
    }
}
