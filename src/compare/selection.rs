//! Canonical motor selection.
//!
//! Each candidate earns a bonus for every richness criterion on which it ties the
//! batch maximum. Weights are separated by a decimal place, so a higher-priority
//! criterion always outweighs all lower ones combined:
//!
//! 1. most standard delays (1000)
//! 2. most native samples (100)
//! 3. longest description (10)
//! 4. trusted export format (1)
//!
//! The scan keeps the incumbent unless a later candidate scores strictly higher,
//! so equal scores resolve to the lowest batch index.

use crate::domain::{ComparePolicy, Goodness, SourceBatch};

pub const DELAYS_WEIGHT: u32 = 1000;
pub const POINTS_WEIGHT: u32 = 100;
pub const DESCRIPTION_WEIGHT: u32 = 10;
pub const TRUSTED_FORMAT_WEIGHT: u32 = 1;

/// Score every candidate in batch order.
pub fn score_candidates(batch: &SourceBatch, policy: &ComparePolicy) -> Vec<Goodness> {
    let max_delays = batch.motors().map(|m| m.delays().len()).max().unwrap_or(0);
    let max_points = batch.motors().map(|m| m.point_count()).max().unwrap_or(0);
    let max_description = batch.motors().map(|m| m.description_len()).max().unwrap_or(0);

    batch
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let m = &entry.motor;
            let max_delays = m.delays().len() == max_delays;
            let max_points = m.point_count() == max_points;
            let max_description = m.description_len() == max_description;
            let trusted_format = policy.is_trusted_source(&entry.source);

            let score = bonus(max_delays, DELAYS_WEIGHT)
                + bonus(max_points, POINTS_WEIGHT)
                + bonus(max_description, DESCRIPTION_WEIGHT)
                + bonus(trusted_format, TRUSTED_FORMAT_WEIGHT);

            Goodness {
                index,
                max_delays,
                max_points,
                max_description,
                trusted_format,
                score,
            }
        })
        .collect()
}

/// Highest-scoring candidate; the first one wins ties.
pub fn select_best(scores: &[Goodness]) -> Option<&Goodness> {
    let mut best = scores.first()?;
    for g in &scores[1..] {
        if g.score > best.score {
            best = g;
        }
    }
    Some(best)
}

fn bonus(awarded: bool, weight: u32) -> u32 {
    if awarded { weight } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::fixtures::{batch_of, MotorFixture};

    #[test]
    fn delay_count_outranks_point_count() {
        let batch = batch_of(vec![
            MotorFixture::new(100.0).delays(&[6.0]).points(80),
            MotorFixture::new(100.0).delays(&[6.0, 10.0]).points(50),
        ]);
        let scores = score_candidates(&batch, &ComparePolicy::default());

        assert_eq!(scores[0].score, POINTS_WEIGHT + DESCRIPTION_WEIGHT);
        assert_eq!(scores[1].score, DELAYS_WEIGHT + DESCRIPTION_WEIGHT);
        assert_eq!(select_best(&scores).unwrap().index, 1);
    }

    #[test]
    fn trusted_suffix_breaks_an_otherwise_exact_tie() {
        let batch = batch_of(vec![
            MotorFixture::new(100.0).source("H143.eng"),
            MotorFixture::new(100.0).source("H143.RSE"),
        ]);
        let scores = score_candidates(&batch, &ComparePolicy::default());

        assert_eq!(scores[0].score, 1110);
        assert_eq!(scores[1].score, 1111);
        assert!(scores[1].trusted_format);
        assert_eq!(select_best(&scores).unwrap().index, 1);
    }

    #[test]
    fn equal_scores_resolve_to_the_first_candidate() {
        let batch = batch_of(vec![
            MotorFixture::new(100.0),
            MotorFixture::new(100.0),
            MotorFixture::new(100.0),
        ]);
        let scores = score_candidates(&batch, &ComparePolicy::default());

        assert!(scores.iter().all(|g| g.score == 1110));
        assert_eq!(select_best(&scores).unwrap().index, 0);
    }

    #[test]
    fn disabled_suffix_awards_nothing() {
        let batch = batch_of(vec![MotorFixture::new(100.0).source("x.rse")]);
        let policy = ComparePolicy {
            trusted_suffix: None,
            ..ComparePolicy::default()
        };
        let scores = score_candidates(&batch, &policy);
        assert!(!scores[0].trusted_format);
        assert_eq!(scores[0].score, 1110);
    }

    #[test]
    fn no_candidates_no_selection() {
        assert!(select_best(&[]).is_none());
    }
}
