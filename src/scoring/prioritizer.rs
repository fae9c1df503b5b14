use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::cmp::Ordering;

use super::{clamp01, recency_factor, EPSILON};
use crate::config::ScoringConfig;
use crate::model::{Alarm, RankedAlarm};

/// Scores alarms against an immutable [`ScoringConfig`] and ranks them.
///
/// Both entry points are pure: `now` is passed in by the caller, never
/// read from the system clock, so repeated calls over the same inputs
/// produce bit-identical output.
pub struct Prioritizer {
    config: ScoringConfig,
}

impl Prioritizer {
    pub fn new(config: ScoringConfig) -> Self {
        Prioritizer { config }
    }

    /// Score a single alarm at the evaluation instant `now`.
    ///
    /// Total over well-formed inputs: unknown severities weigh 0, raw
    /// magnitudes beyond their ceilings clamp to 1.0, and a `last_seen`
    /// in the future counts as age 0. The returned `rank` is 0; ranks
    /// are assigned by [`Prioritizer::prioritize`] after the full sort.
    pub fn score(&self, alarm: &Alarm, now: DateTime<Utc>) -> RankedAlarm {
        let severity_weight = self.config.severity_weight(&alarm.severity);

        let freq_norm = clamp01(
            alarm.occurrences_per_hour / self.config.norm.max_occurrences_per_hour.max(EPSILON),
        );
        let link_norm = clamp01(
            f64::from(alarm.affected_links) / f64::from(self.config.norm.max_affected_links.max(1)),
        );
        let impact_norm = clamp01(
            alarm.traffic_impact_pct / self.config.norm.max_traffic_impact_pct.max(EPSILON),
        );

        // Age at minute resolution, floored at 0 for future timestamps.
        let age_hours = ((now - alarm.last_seen).num_minutes() as f64 / 60.0).max(0.0);
        let recency = recency_factor(age_hours, self.config.recency_half_life_hours);

        // Severity is an additive floor; frequency contributes independently
        // of recency; impact and link count decay together with age and are
        // scaled by 100 so beta operates on the same magnitude as the
        // severity weights; the service-affecting bonus is a flat nudge.
        let score = severity_weight
            + self.config.alpha_frequency * freq_norm
            + self.config.beta_impact * (0.6 * impact_norm + 0.4 * link_norm) * 100.0 * recency
            + if alarm.service_affecting {
                self.config.gamma_service_affecting_bonus
            } else {
                0.0
            };

        let reason = build_reason(alarm, severity_weight, recency);

        RankedAlarm {
            alarm: alarm.clone(),
            score,
            rank: 0,
            reason,
        }
    }

    /// Score every alarm, sort descending by score, assign dense 1-based
    /// ranks, and optionally keep only the first `top_n` entries.
    ///
    /// Ties on score break by ascending lexical comparison of the
    /// severity label. That is a plain string comparison, not a
    /// severity-aware one ("Critical" happens to sort before "Major"
    /// alphabetically); a known quirk kept for deterministic output.
    pub fn prioritize(
        &self,
        alarms: &[Alarm],
        now: DateTime<Utc>,
        top_n: Option<usize>,
    ) -> Vec<RankedAlarm> {
        // Per-alarm scoring is independent, so order of evaluation does
        // not matter; collect preserves input order for the stable sort.
        let mut ranked: Vec<RankedAlarm> = alarms.par_iter().map(|a| self.score(a, now)).collect();

        ranked.sort_by(|x, y| {
            y.score
                .partial_cmp(&x.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| x.alarm.severity.cmp(&y.alarm.severity))
        });

        for (position, entry) in ranked.iter_mut().enumerate() {
            entry.rank = position as u32 + 1;
        }

        if let Some(limit) = top_n {
            if limit > 0 && limit < ranked.len() {
                ranked.truncate(limit);
            }
        }

        ranked
    }
}

/// Assemble the one-line justification from the same inputs that drove
/// the score. Clause order is fixed; only clauses whose trigger holds
/// are emitted, and the recency clause always closes the line.
///
/// The severity bands test the looked-up weight value, not the label,
/// so a custom weight table shifts which band a given label lands in.
fn build_reason(alarm: &Alarm, severity_weight: f64, recency: f64) -> String {
    let mut reason = String::new();

    if alarm.service_affecting {
        reason.push_str("Service affecting; ");
    }

    if severity_weight >= 100.0 {
        reason.push_str("Critical severity; ");
    } else if severity_weight >= 70.0 {
        reason.push_str("Major severity; ");
    } else if severity_weight >= 40.0 {
        reason.push_str("Minor/Warning; ");
    }

    if alarm.traffic_impact_pct > 0.0 {
        reason.push_str(&format!("Traffic impact {}%; ", alarm.traffic_impact_pct));
    }
    if alarm.affected_links > 0 {
        reason.push_str(&format!("{} links affected; ", alarm.affected_links));
    }
    if alarm.occurrences_per_hour > 0.0 {
        reason.push_str(&format!("{} occ/hr; ", alarm.occurrences_per_hour));
    }

    reason.push_str(&format!("Recency factor {recency}"));
    reason
}
