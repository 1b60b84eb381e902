use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use lcov_badge::cli::{cmd_generate, USAGE};
use lcov_badge::generate::GenerateOptions;
use lcov_badge::threshold::{Thresholds, DEFAULT_COLORS, DEFAULT_CUTOFFS};

/// generate_lcov_badge — line and branch coverage SVG badges from an LCOV file.
#[derive(Parser)]
#[command(name = "generate_lcov_badge", version, about)]
struct Cli {
    /// Path to the LCOV `.info` file.
    lcov_file: PathBuf,

    /// Directory the badges are written to (created if missing).
    badges_directory: PathBuf,

    /// File name of the line coverage badge.
    coverage_badge_filename: PathBuf,

    /// File name of the branch coverage badge.
    branch_coverage_badge_filename: PathBuf,

    /// Anything after the four paths is accepted and ignored.
    #[arg(hide = true)]
    _extra: Vec<String>,

    /// Color cutoffs in percent, best first (default: 100,90,80,70,60).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    cutoffs: Option<Vec<f64>>,

    /// Badge colors, best first; the last is used below every cutoff.
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Print a JSON summary instead of the written paths.
    #[arg(long)]
    json: bool,

    /// Log parse and write details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cutoffs = cli.cutoffs.unwrap_or_else(|| DEFAULT_CUTOFFS.to_vec());
    let colors = cli
        .colors
        .unwrap_or_else(|| DEFAULT_COLORS.iter().map(|c| c.to_string()).collect());
    let thresholds = Thresholds::new(cutoffs, colors).context("Invalid --cutoffs/--colors")?;

    let opts = GenerateOptions {
        lcov_file: cli.lcov_file,
        badges_dir: cli.badges_directory,
        coverage_filename: cli.coverage_badge_filename,
        branch_filename: cli.branch_coverage_badge_filename,
        thresholds,
    };

    let output = cmd_generate(&opts, cli.json)?;
    print!("{output}");
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{USAGE}");
            return Ok(ExitCode::from(1));
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);
    run(cli)?;
    Ok(ExitCode::SUCCESS)
}
