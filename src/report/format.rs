//! Formatted terminal output.
//!
//! The comparison itself is pure; everything that turns its diagnostics into
//! text lives here. The property table is tab-separated: one row per property,
//! one column per motor, followed by the discrepancy for real-valued rows.

use crate::domain::{Comparison, CountStats, PropertyStats, SourceBatch, Verdict};
use crate::io::load::LoadOutcome;

/// Format the `Files` line, marking sources that failed to load.
pub fn format_load_summary(outcome: &LoadOutcome) -> String {
    let mut out = String::from("Files      :");
    for file in &outcome.files {
        out.push('\t');
        out.push_str(file);
        if let Some(failure) = outcome.failure_for(file) {
            out.push_str(&format!("(ERR:{})", failure.error));
        }
    }
    out.push('\n');
    out
}

/// Format the property table followed by the verdict line.
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();

    if let Some(s) = &comparison.scalars {
        out.push_str("Manufacture:");
        for m in &s.manufacturers {
            out.push_str(&format!("\t{m}"));
        }
        out.push('\n');

        out.push_str(&property_row("Max.thrust :", &s.peak_thrust, 1.0));
        out.push_str(&property_row("Total time :", &s.burn_time, 1.0));
        out.push_str(&property_row("Impulse    :", &s.total_impulse, 1.0));
        // Masses are shown in grams.
        out.push_str(&property_row("Init mass  :", &s.initial_mass, 1000.0));
        out.push_str(&property_row("Empty mass :", &s.burnout_mass, 1000.0));
        out.push_str(&count_row("Delays     :", &s.delays));
        out.push_str(&count_row("Points     :", &s.points));
        out.push_str(&count_row("Comment len:", &s.description_len));
    }

    out.push_str(&format_verdict(comparison));
    out.push('\n');
    out
}

/// The one-line verdict.
pub fn format_verdict(comparison: &Comparison) -> String {
    match &comparison.verdict {
        Verdict::Empty => "ERROR: No motors loaded.".to_string(),
        Verdict::SingleCandidate { source, .. } => format!("Best (ONLY): {source}"),
        Verdict::Mismatch { causes } => {
            let labels: Vec<&str> = causes.iter().map(|c| c.label()).collect();
            format!("ERROR: {} differs", labels.join(", "))
        }
        Verdict::CurveMismatch { invalid, divisions } => {
            let margin = comparison.curve.as_ref().map_or(0.0, |c| c.tolerance);
            format!(
                "ERROR: {invalid}/{divisions} points have thrust differing over {:.1}%",
                margin * 100.0
            )
        }
        Verdict::InsufficientData { points, .. } => {
            format!("ERROR: Best has only {points} data points")
        }
        Verdict::Consistent { score, source, .. } => format!("Best ({score}): {source}"),
    }
}

/// Per-candidate tie-break breakdown (empty if selection did not run).
pub fn format_goodness(comparison: &Comparison, batch: &SourceBatch) -> String {
    if comparison.goodness.is_empty() {
        return String::new();
    }
    let selected = comparison.verdict.selected();

    let mut out = String::new();
    out.push_str("Candidates:\n");
    out.push_str(
        format!(
            "  {:>3} {:>6} {:<7} {:<7} {:<7} {:<7} {}\n",
            "#", "score", "delays", "points", "descr", "trusted", "source"
        )
        .trim_end(),
    );
    out.push('\n');

    for g in &comparison.goodness {
        let mark = if selected == Some(g.index) { "*" } else { " " };
        let source = batch.get(g.index).map_or("", |e| e.source.as_str());
        out.push_str(
            format!(
                "{mark} {:>3} {:>6} {:<7} {:<7} {:<7} {:<7} {}\n",
                g.index + 1,
                g.score,
                tick(g.max_delays),
                tick(g.max_points),
                tick(g.max_description),
                tick(g.trusted_format),
                source,
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

fn property_row(label: &str, stats: &PropertyStats, scale: f64) -> String {
    let mut out = label.to_string();
    for v in &stats.values {
        out.push_str(&format!("\t{:.2}", v * scale));
    }
    out.push_str(&format!(
        "\t(discrepancy {})\n",
        fmt_percent(stats.spread.discrepancy)
    ));
    out
}

fn count_row(label: &str, stats: &CountStats) -> String {
    let mut out = label.to_string();
    for v in &stats.values {
        out.push_str(&format!("\t{v}"));
    }
    out.push('\n');
    out
}

fn fmt_percent(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.1}%", ratio * 100.0)
    } else {
        "inf".to_string()
    }
}

fn tick(awarded: bool) -> &'static str {
    if awarded { "yes" } else { "-" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_batch;
    use crate::compare::fixtures::{batch_of, MotorFixture};
    use crate::domain::{ComparePolicy, MismatchCause};
    use crate::io::load::LoadFailure;

    #[test]
    fn verdict_lines() {
        let v = |verdict| format_verdict(&Comparison::terminal(verdict));
        assert_eq!(v(Verdict::Empty), "ERROR: No motors loaded.");
        assert_eq!(
            v(Verdict::SingleCandidate {
                index: 0,
                source: "a.rse".to_string()
            }),
            "Best (ONLY): a.rse"
        );
        assert_eq!(
            v(Verdict::Mismatch {
                causes: vec![MismatchCause::Manufacturer, MismatchCause::EmptyMass]
            }),
            "ERROR: Manufacturer, Empty mass differs"
        );
        assert_eq!(
            v(Verdict::InsufficientData {
                index: 0,
                source: "a.rse".to_string(),
                points: 5
            }),
            "ERROR: Best has only 5 data points"
        );
        assert_eq!(
            v(Verdict::Consistent {
                index: 1,
                score: 1110,
                source: "b.eng".to_string()
            }),
            "Best (1110): b.eng"
        );
    }

    #[test]
    fn property_table_for_a_mismatch() {
        let batch = batch_of(vec![
            MotorFixture::new(100.0).points(2).delays(&[6.0]),
            MotorFixture::new(100.0).points(2).manufacturer("AeroTech").masses(0.4, 0.12),
        ]);
        let txt = format_comparison(&compare_batch(&batch, &ComparePolicy::default()));
        let expected = concat!(
            "Manufacture:\tCesaroni\tAeroTech\n",
            "Max.thrust :\t100.00\t100.00\t(discrepancy 0.0%)\n",
            "Total time :\t1.00\t1.00\t(discrepancy 0.0%)\n",
            "Impulse    :\t100.00\t100.00\t(discrepancy 0.0%)\n",
            "Init mass  :\t300.00\t400.00\t(discrepancy 33.3%)\n",
            "Empty mass :\t120.00\t120.00\t(discrepancy 0.0%)\n",
            "Delays     :\t1\t3\n",
            "Points     :\t2\t2\n",
            "Comment len:\t7\t7\n",
            "ERROR: Manufacturer, Initial mass differs\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn curve_mismatch_line_uses_the_applied_margin() {
        let cmp = Comparison {
            verdict: Verdict::CurveMismatch {
                invalid: 100,
                divisions: 100,
            },
            scalars: None,
            curve: Some(crate::domain::CurveReport {
                reference_thrust: 1.0,
                tolerance: 0.15,
                allowance: 15,
                samples: Vec::new(),
                invalid: 100,
            }),
            goodness: Vec::new(),
        };
        assert_eq!(
            format_verdict(&cmp),
            "ERROR: 100/100 points have thrust differing over 15.0%"
        );
    }

    #[test]
    fn load_summary_marks_failures() {
        let outcome = LoadOutcome {
            files: vec!["a.json".to_string(), "b.json".to_string()],
            batch: SourceBatch::new(),
            failures: vec![LoadFailure {
                source: "b.json".to_string(),
                error: "no motors in file".to_string(),
            }],
        };
        assert_eq!(
            format_load_summary(&outcome),
            "Files      :\ta.json\tb.json(ERR:no motors in file)\n"
        );
    }

    #[test]
    fn goodness_table_marks_an_underpopulated_winner() {
        let batch = batch_of(vec![
            MotorFixture::new(100.0).points(5),
            MotorFixture::new(100.0).points(5),
        ]);
        let cmp = compare_batch(&batch, &ComparePolicy::default());
        assert!(matches!(cmp.verdict, Verdict::InsufficientData { index: 0, .. }));

        let expected = concat!(
            "    #  score delays  points  descr   trusted source\n",
            "*   1   1110 yes     yes     yes     -       motor0.eng\n",
            "    2   1110 yes     yes     yes     -       motor1.eng\n",
        );
        assert_eq!(format_goodness(&cmp, &batch), expected);
    }

    #[test]
    fn goodness_table_marks_the_winner() {
        let batch = batch_of(vec![
            MotorFixture::new(100.0).source("a.eng"),
            MotorFixture::new(100.0).source("b.rse"),
        ]);
        let cmp = compare_batch(&batch, &ComparePolicy::default());
        let txt = format_goodness(&cmp, &batch);
        let expected = concat!(
            "    #  score delays  points  descr   trusted source\n",
            "    1   1110 yes     yes     yes     -       a.eng\n",
            "*   2   1111 yes     yes     yes     yes     b.rse\n",
        );
        assert_eq!(txt, expected);
    }
}
