//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs logging
//! - runs the compare pipeline
//! - prints reports/plots and writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, CompareArgs, PlotArgs};
use crate::domain::{ComparePolicy, Comparison};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `motorcmp` binary.
pub fn run() -> Result<(), AppError> {
    // Environment fallbacks (e.g. MOTORCMP_TRUSTED_SUFFIX) may come from `.env`.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Compare(args) => handle_compare(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    crate::logging::init_logging(args.verbose);

    let policy = policy_from_args(&args);
    let run = pipeline::run_compare(&args.files, &policy)?;

    print!("{}", crate::report::format_load_summary(&run.outcome));
    print!("{}", crate::report::format_comparison(&run.comparison));
    let goodness = crate::report::format_goodness(&run.comparison, &run.outcome.batch);
    if !goodness.is_empty() {
        print!("\n{goodness}");
    }

    if args.plot {
        if let Some(grid) = &run.grid {
            let plot = crate::plot::render_thrust_plot(grid, &run.outcome.batch, args.width, args.height);
            println!("\n{plot}");
        }
    }

    // Optional exports.
    if let Some(path) = &args.json {
        crate::io::report::write_comparison_json(path, &run.outcome, &run.comparison, &policy)?;
    }
    if let Some(path) = &args.export_grid {
        match &run.grid {
            Some(grid) => crate::io::export::write_grid_csv(path, grid, &run.outcome.batch)?,
            None => tracing::warn!(path = %path.display(), "no motors loaded; grid export skipped"),
        }
    }

    info!(verdict = ?run.comparison.verdict, "comparison finished");
    exit_status(&run.comparison)
}

/// Map the verdict to the process outcome. The verdict line itself is already
/// on stdout, so the error only carries a short summary.
fn exit_status(comparison: &Comparison) -> Result<(), AppError> {
    if comparison.verdict.is_success() {
        Ok(())
    } else {
        Err(AppError::new(1, "comparison failed"))
    }
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    crate::logging::init_logging(args.verbose);

    let (outcome, grid) = pipeline::run_plot(&args.files, args.divisions)?;
    print!("{}", crate::report::format_load_summary(&outcome));

    match grid {
        Some(grid) => {
            let plot = crate::plot::render_thrust_plot(&grid, &outcome.batch, args.width, args.height);
            println!("{plot}");
            Ok(())
        }
        None => Err(AppError::new(1, "ERROR: No motors loaded.")),
    }
}

pub fn policy_from_args(args: &CompareArgs) -> ComparePolicy {
    ComparePolicy {
        max_thrust_margin: args.max_thrust_margin,
        total_impulse_margin: args.impulse_margin,
        initial_mass_margin: args.mass_margin,
        burnout_mass_margin: args.mass_margin,
        thrust_margin: args.thrust_margin,
        divisions: args.divisions,
        allowed_invalid_points: args.allowed_invalid,
        min_points: args.min_points,
        trusted_suffix: if args.no_trusted_suffix {
            None
        } else {
            Some(args.trusted_suffix.clone())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn compare_args(argv: &[&str]) -> CompareArgs {
        let mut full = vec!["motorcmp", "compare"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Compare(args) => args,
            Command::Plot(_) => panic!("expected compare"),
        }
    }

    #[test]
    fn defaults_match_the_reference_policy() {
        let args = compare_args(&["--trusted-suffix", ".rse", "a.json"]);
        assert_eq!(policy_from_args(&args), ComparePolicy::default());
    }

    #[test]
    fn overrides_reach_the_policy() {
        let args = compare_args(&[
            "--max-thrust-margin",
            "0.3",
            "--mass-margin",
            "0.05",
            "--divisions",
            "50",
            "--allowed-invalid",
            "3",
            "--min-points",
            "12",
            "--no-trusted-suffix",
            "a.json",
        ]);
        let policy = policy_from_args(&args);
        assert_eq!(policy.max_thrust_margin, 0.3);
        assert_eq!(policy.initial_mass_margin, 0.05);
        assert_eq!(policy.burnout_mass_margin, 0.05);
        assert_eq!(policy.total_impulse_margin, 0.10);
        assert_eq!(policy.divisions, 50);
        assert_eq!(policy.allowed_invalid_points, 3);
        assert_eq!(policy.min_points, 12);
        assert_eq!(policy.trusted_suffix, None);
    }

    #[test]
    fn failed_verdicts_exit_with_a_short_message() {
        use crate::domain::{MismatchCause, Verdict};

        let ok = Comparison::terminal(Verdict::SingleCandidate {
            index: 0,
            source: "a.rse".to_string(),
        });
        assert!(exit_status(&ok).is_ok());

        let failed = Comparison::terminal(Verdict::Mismatch {
            causes: vec![MismatchCause::MaxThrust],
        });
        let err = exit_status(&failed).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "comparison failed");
    }

    #[test]
    fn custom_trusted_suffix() {
        let args = compare_args(&["--trusted-suffix", ".eng", "a.json"]);
        assert_eq!(policy_from_args(&args).trusted_suffix.as_deref(), Some(".eng"));
    }
}
