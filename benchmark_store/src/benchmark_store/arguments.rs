//!
//! The benchmark store arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark store arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark store commands.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Appends a benchmark run to the data file and compares it with the previous run.
    Append {
        /// Path to the data file.
        #[arg(long, default_value = "benchmarks/data.js")]
        data_file: PathBuf,

        /// Suite name.
        #[arg(long, default_value = benchmark_store::DEFAULT_SUITE)]
        suite: String,

        /// Benchmark tool: `benchmarkjs`, `cargo`, `customBiggerIsBetter`, or `customSmallerIsBetter`.
        #[arg(long)]
        tool: benchmark_store::Tool,

        /// Path to the benchmark tool output.
        #[arg(long)]
        output_file: PathBuf,

        /// Path to a JSON file with the benchmarked commit, or a push event payload.
        #[arg(long)]
        commit: PathBuf,

        /// Repository URL. If omitted, the URL in the data file is kept.
        #[arg(long, default_value_t = String::new())]
        repo_url: String,

        /// Regression ratio that triggers an alert, for example `200%` or `2.0`.
        #[arg(long, default_value_t = benchmark_store::Threshold::default())]
        alert_threshold: benchmark_store::Threshold,

        /// Exits with an error if any measurement regressed beyond the threshold.
        #[arg(long)]
        fail_on_alert: bool,
    },
    /// Prints the suites stored in the data file.
    Show {
        /// Path to the data file.
        #[arg(long, default_value = "benchmarks/data.js")]
        data_file: PathBuf,

        /// Prints only this suite.
        #[arg(long)]
        suite: Option<String>,
    },
}
