use clap::ValueEnum;
use sample_stats::Report;
use std::error::Error;
use std::io::Write;

#[derive(Debug, Copy, Clone, Default, ValueEnum)]
pub(crate) enum Output {
    /// Default classic output for human reading. One line per statistic.
    #[default]
    Default,
    /// Json object output. Contains the sample count and capacity along with the statistics.
    Json,
    /// CSV output. A header row of statistic names and a single row of values.
    CSV,
}

impl Output {
    pub(crate) fn display_report(
        &self,
        w: &mut impl Write,
        report: &Report,
    ) -> Result<(), Box<dyn Error>> {
        match self {
            Output::Default => {
                for (name, value) in report.entries() {
                    writeln!(w, "{}: {value:.3}", display_name(name))?;
                }
            }
            Output::Json => {
                serde_json::to_writer_pretty(&mut *w, report)?;
                writeln!(w)?;
            }
            Output::CSV => {
                let mut csv = csv::Writer::from_writer(w);
                // CSV header
                csv.write_record(report.entries().map(|(name, _)| name))?;
                csv.write_record(report.entries().map(|(_, value)| value.to_string()))?;
                csv.flush()?;
            }
        }
        Ok(())
    }
}

fn display_name(name: &str) -> &str {
    match name {
        "sum" => "Sum",
        "product" => "Product",
        "mean" => "Mean",
        "variance" => "Variance",
        "std_dev" => "StdDev",
        other => other,
    }
}
