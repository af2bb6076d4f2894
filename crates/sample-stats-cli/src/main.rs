use crate::input::read_values;
use crate::output::Output;
use clap::{Parser, ValueEnum};
use sample_stats::{Report, Samples, Selection};
use std::error::Error;
use std::fs::File;
use std::io::{stdin, stdout, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod input;
mod output;

/// Sample stats computes descriptive statistics over a list of numbers.
///
/// Values are read from `--input` first, then from the command line.
///
/// Use the `RUST_LOG` environment variable to configure logging. The trace level logs every storage growth.
#[derive(Parser, Debug)]
#[command(version, author)]
struct CliArgs {
    /// Values to analyze.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Read whitespace separated values from a file. Use `-` to read from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Select the statistics to compute. Omit the option to compute all of them.
    #[arg(short, long)]
    stats: Vec<Statistic>,

    /// Report 0 for statistics that can't be computed (empty input) instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Choose the CLI stdout format. Omit the option for the default.
    /// Status messages will be printed to stderr in all cases.
    #[arg(long, value_enum)]
    output: Option<Output>,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum)]
pub enum Statistic {
    /// Sum of all values
    Sum,
    /// Product of all values
    Product,
    /// Arithmetic mean
    Mean,
    /// Population variance
    Variance,
    /// Population standard deviation
    StdDev,
}

impl CliArgs {
    fn selection(&self) -> Selection {
        let selection = Selection {
            sum: self.stats.contains(&Statistic::Sum),
            product: self.stats.contains(&Statistic::Product),
            mean: self.stats.contains(&Statistic::Mean),
            variance: self.stats.contains(&Statistic::Variance),
            std_dev: self.stats.contains(&Statistic::StdDev),
        };
        if selection.is_empty() {
            Selection::all()
        } else {
            selection
        }
    }

    fn output(&self) -> Output {
        self.output.unwrap_or_default()
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut env_filter = EnvFilter::builder();
    env_filter = if cfg!(debug_assertions) {
        env_filter.with_default_directive(LevelFilter::DEBUG.into())
    } else {
        env_filter.with_default_directive(LevelFilter::INFO.into())
    };
    let env_filter = env_filter.from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();

    let mut samples = Samples::new();

    if let Some(path) = &args.input {
        match read_source(path) {
            Ok(values) => samples.extend(values),
            Err(e) => {
                error!("Could not read input : {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    samples.extend(args.values.iter().copied());

    debug!("{samples}");
    info!(
        count = samples.len(),
        capacity = samples.capacity(),
        "Collected samples"
    );

    let selection = args.selection();
    let report = if args.lenient {
        Report::compute_lenient(&samples, &selection)
    } else {
        match Report::compute(&samples, &selection) {
            Ok(report) => report,
            Err(e) => {
                error!("Could not compute statistics : {e}");
                return ExitCode::FAILURE;
            }
        }
    };
    samples.release();

    if let Err(e) = args.output().display_report(&mut stdout().lock(), &report) {
        error!("Could not write results : {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn read_source(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    if path.to_str() == Some("-") {
        debug!("Reading values from stdin");
        Ok(read_values(stdin().lock())?)
    } else {
        debug!(path = %path.display(), "Reading values from file");
        Ok(read_values(BufReader::new(File::open(path)?))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_values() {
        let args = CliArgs::try_parse_from(["sample-stats", "-1.5", "2", "--output", "csv"]).unwrap();
        assert_eq!(args.values, vec![-1.5, 2.0]);
        assert!(matches!(args.output(), Output::CSV));
    }

    #[test]
    fn no_selection_means_all() {
        let args = CliArgs::try_parse_from(["sample-stats", "1"]).unwrap();
        assert_eq!(args.selection(), Selection::all());
    }

    #[test]
    fn explicit_selection() {
        let args =
            CliArgs::try_parse_from(["sample-stats", "-s", "mean", "--stats", "std-dev", "1"])
                .unwrap();
        let selection = args.selection();
        assert!(selection.mean && selection.std_dev);
        assert!(!selection.sum && !selection.product && !selection.variance);
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(CliArgs::try_parse_from(["sample-stats", "abc"]).is_err());
    }
}
