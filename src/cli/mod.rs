//! Command-line parsing for the motor comparison tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! comparison code. Mapping arguments onto a `ComparePolicy` happens in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "motorcmp",
    version,
    about = "Reconcile thrust-curve files that describe the same rocket motor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare motor files, print diagnostics and the selected source.
    Compare(CompareArgs),
    /// Load motor files and plot their thrust curves without comparing.
    Plot(PlotArgs),
}

/// Options for comparing a batch of motor files.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Motor JSON files (one source per file; files may hold several motors).
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Write the full comparison report as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Export the resampled thrust grid as CSV.
    #[arg(long = "export-grid", value_name = "PATH")]
    pub export_grid: Option<PathBuf>,

    /// Render an ASCII plot of the resampled curves.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Relative tolerance on peak thrust.
    #[arg(long, default_value_t = 0.20)]
    pub max_thrust_margin: f64,

    /// Relative tolerance on total impulse.
    #[arg(long, default_value_t = 0.10)]
    pub impulse_margin: f64,

    /// Relative tolerance on initial and burnout mass.
    #[arg(long, default_value_t = 0.10)]
    pub mass_margin: f64,

    /// Relative tolerance on thrust at each sample time.
    #[arg(long, default_value_t = 0.15)]
    pub thrust_margin: f64,

    /// Number of evenly spaced sample times for the curve check.
    #[arg(long, default_value_t = 100)]
    pub divisions: usize,

    /// Number of sample times allowed to exceed the thrust margin.
    #[arg(long, default_value_t = 15)]
    pub allowed_invalid: usize,

    /// Minimum data points the selected source must have.
    #[arg(long, default_value_t = 7)]
    pub min_points: usize,

    /// Source-name suffix that earns the trusted-format bonus (case-insensitive).
    #[arg(long, env = "MOTORCMP_TRUSTED_SUFFIX", default_value = ".rse")]
    pub trusted_suffix: String,

    /// Disable the trusted-format bonus.
    #[arg(long)]
    pub no_trusted_suffix: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Options for plotting a batch of motor files.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Motor JSON files.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Number of evenly spaced sample times.
    #[arg(long, default_value_t = 100)]
    pub divisions: usize,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
