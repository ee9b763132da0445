use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use epi_stats::error::Error;
use epi_stats::filter::FilterCriteria;
use epi_stats::reader::read_sources;
use epi_stats::render::is_width_token;
use epi_stats::schema::date_utils::parse_date_argument;
use epi_stats::{Gender, HistogramWidth, PipelineConfig, Report};

#[derive(Parser, Debug)]
#[command(
    name = "epi-stats",
    version,
    about = "Filter and summarize epidemiological case records",
    override_usage = "epi-stats [-h] [FILTERS] [COMMAND] [LOG [LOG2 [...]]]",
    after_help = "COMMANDS:\n  infected   number of infected\n  merge      merge input files into one, header first (default)\n  gender     infected per gender\n  age        infected per age group\n  daily      infected per day\n  monthly    infected per month\n  yearly     infected per year\n  countries  infected per country of infection, without CZ\n  districts  infected per district\n  regions    infected per region\n\nLOG files may be gzip (.gz) or bzip2 (.bz2) compressed. Without LOG, stdin is read."
)]
struct Cli {
    /// Only records on or after DATETIME (YYYY-MM-DD)
    #[arg(short = 'a', value_name = "DATETIME", value_parser = parse_date_argument)]
    after: Option<NaiveDate>,

    /// Only records on or before DATETIME (YYYY-MM-DD)
    #[arg(short = 'b', value_name = "DATETIME", value_parser = parse_date_argument)]
    before: Option<NaiveDate>,

    /// Only records of GENDER (M or Z)
    #[arg(short = 'g', value_name = "GENDER", value_parser = parse_gender)]
    gender: Option<Gender>,

    /// Render counts as histograms; `-s WIDTH` scales the largest count to WIDTH characters
    #[arg(short = 's')]
    histogram: bool,

    #[arg(long = "width", hide = true, value_parser = parse_width)]
    width: Option<HistogramWidth>,

    /// Optional COMMAND followed by input files
    #[arg(value_name = "COMMAND|LOG")]
    inputs: Vec<String>,
}

fn parse_gender(s: &str) -> Result<Gender, Error> {
    s.parse()
}

fn parse_width(s: &str) -> Result<HistogramWidth, Error> {
    s.parse()
}

/// Rewrite `-s N` into `--width=N` so a bare `-s` never swallows the command
fn normalize_histogram_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().peekable();
    let mut normalized = Vec::new();
    while let Some(arg) = args.next() {
        if arg != "-s" {
            normalized.push(arg);
            continue;
        }
        normalized.push(arg);
        let numeric = args
            .peek()
            .and_then(|next| next.to_str())
            .is_some_and(is_width_token);
        if numeric {
            if let Some(value) = args.next() {
                let mut width = OsString::from("--width=");
                width.push(value);
                normalized.push(width);
            }
        }
    }
    normalized
}

impl Cli {
    /// Split positionals into the report and the input files
    ///
    /// The first positional is the command when it names a report. Otherwise
    /// it must be an existing file.
    fn split_inputs(&self) -> Result<(Report, Vec<PathBuf>), Error> {
        let Some((first, rest)) = self.inputs.split_first() else {
            return Ok((Report::default(), Vec::new()));
        };
        match first.parse::<Report>() {
            Ok(report) => Ok((report, rest.iter().map(PathBuf::from).collect())),
            Err(err) if !Path::new(first).exists() => Err(err),
            Err(_) => Ok((
                Report::default(),
                self.inputs.iter().map(PathBuf::from).collect(),
            )),
        }
    }

    fn histogram(&self) -> Option<HistogramWidth> {
        match (self.histogram, self.width) {
            (_, Some(width)) => Some(width),
            (true, None) => Some(HistogramWidth::ReportDefault),
            (false, None) => None,
        }
    }

    fn filters(&self) -> FilterCriteria {
        FilterCriteria {
            after: self.after,
            before: self.before,
            gender: self.gender,
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let (report, files) = cli.split_inputs()?;
    let config = PipelineConfig {
        report,
        filters: cli.filters(),
        histogram: cli.histogram(),
    };

    let lines = read_sources(&files).context("Failed to read input records")?;
    let output = epi_stats::run(lines, &config);

    let mut stderr = io::stderr().lock();
    for diagnostic in &output.diagnostics {
        writeln!(stderr, "{diagnostic}").context("Failed to write diagnostics")?;
    }

    let mut stdout = BufWriter::new(io::stdout().lock());
    for line in &output.lines {
        writeln!(stdout, "{line}").context("Failed to write report")?;
    }
    stdout.flush().context("Failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(normalize_histogram_args(std::env::args_os()));
    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("epi-stats: {err:#}");
            ExitCode::FAILURE
        }
    }
}
