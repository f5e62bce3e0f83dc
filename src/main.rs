use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use conjugation::cli::Cli;
use conjugation::config::{load_config, load_config_from_path};
use conjugation::errors::ConjugationError;
use conjugation::observability::init_logging;
use conjugation::pipeline;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => load_config(),
    };

    let options = cli.run_options(&config);
    pipeline::run(&options)
        .with_context(|| format!("failed to process {}", options.input.display()))?;
    Ok(())
}

// Typed library errors pick the exit status; anything else is 1
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ConjugationError>()
        .map_or(1, ConjugationError::exit_code)
}
