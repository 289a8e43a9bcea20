//! Command line arguments for `sdtex`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sdtex_metrics::Correction;

#[derive(Parser, Debug)]
#[command(name = "sdtex")]
#[command(version)]
#[command(about = "Balanced SDT trial lists and d'/A' metrics", long_about = None)]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate a shuffled list of (condition, stimulus) trials
    Generate(GenerateArgs),
    /// Compute SDT metrics from hit/miss/false alarm/correct rejection counts
    Metrics(MetricsArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Total number of trials
    #[arg(short = 'n', long = "trials", required_unless_present = "config")]
    pub n_trials: Option<usize>,

    /// Number of conditions
    #[arg(short = 'k', long = "conds", default_value_t = 1)]
    pub conds: usize,

    /// Seed for a reproducible order
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON setup file ({"n_trials": .., "conds": .., "seed": ..}); cannot be combined with the other flags
    #[arg(long, value_name = "FILE", conflicts_with_all = ["n_trials", "conds", "seed"])]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct MetricsArgs {
    #[arg(long)]
    pub hits: u64,

    #[arg(long)]
    pub misses: u64,

    /// False alarms
    #[arg(long)]
    pub fas: u64,

    /// Correct rejections
    #[arg(long)]
    pub crs: u64,

    /// extreme, loglinear or aprime
    #[arg(short, long, default_value = "extreme")]
    pub correction: Correction,

    /// Report undefined metrics as NaN instead of failing
    #[arg(long)]
    pub nan: bool,
}
