//! These structs provide the CLI interface for the gdp CLI.

use crate::config::CONFIG_JSON;
use crate::render::ChartKind;
use crate::report::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// gdp: Compute GDP = C + I + G + (X - M) and chart the result.
///
/// The program fabricates yearly consumption, investment, government spending, export and import
/// figures from a seeded noise process, computes GDP and net exports for every year, prints a
/// bilingual (English / Thai) summary and draws charts of the series.
///
/// Settings can be kept in a JSON config file, see `gdp init`. Flags given on the command line
/// take precedence over the config file.
#[derive(Debug, Parser, Clone)]
#[command(name = "gdp", version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a config file with the default settings.
    Init(InitArgs),
    /// Compute GDP from given values.
    ///
    /// Each flag takes a single number or a comma-separated list of numbers. When every list has
    /// one value the result is a single GDP figure, otherwise GDP is computed position by
    /// position and all lists must have the same length.
    Calc(CalcArgs),
    /// Generate sample data and print the GDP summary.
    Summary(SummaryArgs),
    /// Generate sample data and draw charts of it.
    Chart(ChartArgs),
    /// Generate sample data, print the summary and draw every chart.
    Run(RunArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The config file. It is fine for it not to exist, in which case defaults are used.
    #[arg(long, env = "GDP_CONFIG", default_value = CONFIG_JSON)]
    config: PathBuf,
}

impl Common {
    pub fn new(log_level: LevelFilter, config: impl Into<PathBuf>) -> Self {
        Self {
            log_level,
            config: config.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> &Path {
        &self.config
    }
}

/// Args for the `gdp init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// Overwrite the config file if it already exists.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    pub fn new(force: bool) -> Self {
        Self { force }
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

/// Args for the `gdp calc` command.
#[derive(Debug, Parser, Clone)]
pub struct CalcArgs {
    /// Household consumption (C).
    ///
    /// Each list is a single token, so a leading minus sign is read as part of the value.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    consumption: Vec<f64>,

    /// Investment (I).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    investment: Vec<f64>,

    /// Government spending (G).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    government_spending: Vec<f64>,

    /// Exports (X).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    exports: Vec<f64>,

    /// Imports (M).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    imports: Vec<f64>,
}

impl CalcArgs {
    pub fn new(
        consumption: Vec<f64>,
        investment: Vec<f64>,
        government_spending: Vec<f64>,
        exports: Vec<f64>,
        imports: Vec<f64>,
    ) -> Self {
        Self {
            consumption,
            investment,
            government_spending,
            exports,
            imports,
        }
    }

    pub fn consumption(&self) -> &[f64] {
        &self.consumption
    }

    pub fn investment(&self) -> &[f64] {
        &self.investment
    }

    pub fn government_spending(&self) -> &[f64] {
        &self.government_spending
    }

    pub fn exports(&self) -> &[f64] {
        &self.exports
    }

    pub fn imports(&self) -> &[f64] {
        &self.imports
    }
}

/// Sample-data settings that override the config file.
#[derive(Debug, Parser, Clone, Default)]
pub struct SampleArgs {
    /// Number of years to generate.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    years: Option<u32>,

    /// The first year to generate.
    #[arg(long, allow_negative_numbers = true)]
    start_year: Option<i32>,

    /// Seed for the noise process.
    #[arg(long)]
    seed: Option<u64>,
}

impl SampleArgs {
    pub fn new(years: Option<u32>, start_year: Option<i32>, seed: Option<u64>) -> Self {
        Self {
            years,
            start_year,
            seed,
        }
    }

    pub fn years(&self) -> Option<usize> {
        self.years.map(|y| y as usize)
    }

    pub fn start_year(&self) -> Option<i32> {
        self.start_year
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Args for the `gdp summary` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct SummaryArgs {
    #[clap(flatten)]
    sample: SampleArgs,

    /// How to print the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl SummaryArgs {
    pub fn new(sample: SampleArgs, format: OutputFormat) -> Self {
        Self { sample, format }
    }

    pub fn sample(&self) -> &SampleArgs {
        &self.sample
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Args for the `gdp chart` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ChartArgs {
    #[clap(flatten)]
    sample: SampleArgs,

    /// The directory to write charts to. Overrides `output_dir` in the config file.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// The charts to draw. May be repeated. Draws every chart when omitted.
    #[arg(long = "kind", value_enum)]
    kinds: Vec<ChartKind>,
}

impl ChartArgs {
    pub fn new(sample: SampleArgs, output_dir: Option<PathBuf>, kinds: Vec<ChartKind>) -> Self {
        Self {
            sample,
            output_dir,
            kinds,
        }
    }

    pub fn sample(&self) -> &SampleArgs {
        &self.sample
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// The requested charts, or all of them if none were named.
    pub fn kinds(&self) -> Vec<ChartKind> {
        if self.kinds.is_empty() {
            ChartKind::ALL.to_vec()
        } else {
            self.kinds.clone()
        }
    }
}

/// Args for the `gdp run` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct RunArgs {
    #[clap(flatten)]
    sample: SampleArgs,

    /// The directory to write charts to. Overrides `output_dir` in the config file.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl RunArgs {
    pub fn new(sample: SampleArgs, output_dir: Option<PathBuf>) -> Self {
        Self { sample, output_dir }
    }

    pub fn sample(&self) -> &SampleArgs {
        &self.sample
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_scalars() {
        let args = Args::parse_from([
            "gdp",
            "calc",
            "--consumption",
            "5000",
            "--investment",
            "1500",
            "--government-spending",
            "2000",
            "--exports",
            "1800",
            "--imports",
            "1600",
        ]);
        let Command::Calc(calc) = args.command() else {
            panic!("expected calc, got {:?}", args.command());
        };
        assert_eq!(calc.consumption(), &[5000.0]);
        assert_eq!(calc.imports(), &[1600.0]);
        assert_eq!(args.common().config(), Path::new(CONFIG_JSON));
        assert_eq!(args.common().log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_parse_calc_lists_and_negatives() {
        let args = Args::parse_from([
            "gdp",
            "calc",
            "--consumption",
            "1,2,3",
            "--investment",
            "-1,0,1",
            "--government-spending",
            "0,0,0",
            "--exports",
            "1,1,1",
            "--imports",
            "2,2,2",
        ]);
        let Command::Calc(calc) = args.command() else {
            panic!("expected calc");
        };
        assert_eq!(calc.consumption(), &[1.0, 2.0, 3.0]);
        assert_eq!(calc.investment(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_calc_lists_leading_with_negatives() {
        let args = Args::parse_from([
            "gdp",
            "calc",
            "--consumption",
            "-5,1",
            "--investment",
            "-1.5,2",
            "--government-spending",
            "-0,3",
            "--exports",
            "-10,4",
            "--imports",
            "-1e3,NaN",
        ]);
        let Command::Calc(calc) = args.command() else {
            panic!("expected calc");
        };
        assert_eq!(calc.consumption(), &[-5.0, 1.0]);
        assert_eq!(calc.investment(), &[-1.5, 2.0]);
        assert_eq!(calc.government_spending(), &[-0.0, 3.0]);
        assert_eq!(calc.exports(), &[-10.0, 4.0]);
        assert_eq!(calc.imports()[0], -1000.0);
        assert!(calc.imports()[1].is_nan());
    }

    #[test]
    fn test_parse_calc_single_negative_value() {
        let args = Args::parse_from([
            "gdp",
            "calc",
            "--consumption",
            "-5",
            "--investment",
            "0",
            "--government-spending",
            "0",
            "--exports",
            "0",
            "--imports",
            "-2",
        ]);
        let Command::Calc(calc) = args.command() else {
            panic!("expected calc");
        };
        assert_eq!(calc.consumption(), &[-5.0]);
        assert_eq!(calc.imports(), &[-2.0]);
    }

    #[test]
    fn test_parse_chart_kinds() {
        let args = Args::parse_from([
            "gdp",
            "--log-level",
            "debug",
            "chart",
            "--kind",
            "trend",
            "--kind",
            "all-components",
            "--years",
            "5",
        ]);
        let Command::Chart(chart) = args.command() else {
            panic!("expected chart");
        };
        assert_eq!(
            chart.kinds(),
            vec![ChartKind::Trend, ChartKind::AllComponents]
        );
        assert_eq!(chart.sample().years(), Some(5));
        assert_eq!(args.common().log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_chart_kinds_default_to_all() {
        assert_eq!(ChartArgs::default().kinds(), ChartKind::ALL.to_vec());
    }

    #[test]
    fn test_zero_years_rejected() {
        assert!(Args::try_parse_from(["gdp", "summary", "--years", "0"]).is_err());
    }

    #[test]
    fn test_parse_summary_format() {
        let args = Args::parse_from(["gdp", "summary", "--format", "csv", "--seed", "7"]);
        let Command::Summary(summary) = args.command() else {
            panic!("expected summary");
        };
        assert_eq!(summary.format(), OutputFormat::Csv);
        assert_eq!(summary.sample().seed(), Some(7));
        assert_eq!(summary.sample().start_year(), None);
    }
}
