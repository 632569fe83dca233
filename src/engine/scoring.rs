//! Weighted risk scoring over a [`PatientMetrics`] record.

use crate::engine::metrics::PatientMetrics;
use crate::engine::thresholds::{
    CANCELLATION_WEIGHT, INACTIVE_30_PENALTY, INACTIVE_60_PENALTY, LOW_FREQUENCY_PENALTY,
    LOW_FREQUENCY_PER_MONTH, MAX_SCORE, MILD_DECLINE_PENALTY, NO_FUTURE_PENALTY,
    RECENCY_SATURATION_DAYS, RECENCY_WEIGHT, REDUCED_FREQUENCY_PENALTY,
    REDUCED_FREQUENCY_PER_MONTH, STEEP_DECLINE_PENALTY, STEEP_DECLINE_TREND,
};

/// Compute the engagement risk score for one patient.
///
/// Purely additive: each signal contributes independently and the sum is
/// truncated to an integer and capped at [`MAX_SCORE`]. There is no lower
/// clamp; a negative `days_since_last` (future-dated latest appointment)
/// reduces the recency contribution instead of being treated as zero.
pub fn risk_score(metrics: &PatientMetrics) -> i64 {
    let mut score = 0.0;

    // Time without contact, saturating at the 60-day horizon.
    let days_factor = (metrics.days_since_last as f64 / RECENCY_SATURATION_DAYS).min(1.0);
    score += days_factor * RECENCY_WEIGHT;

    score += metrics.cancellation_rate * CANCELLATION_WEIGHT;

    if metrics.frequency_per_month < LOW_FREQUENCY_PER_MONTH {
        score += LOW_FREQUENCY_PENALTY;
    } else if metrics.frequency_per_month < REDUCED_FREQUENCY_PER_MONTH {
        score += REDUCED_FREQUENCY_PENALTY;
    }

    // The two inactivity rules are mutually exclusive by construction: an
    // empty 30-day window contributes 15 points and nothing more, even
    // though the 60-day window is then trivially empty as well.
    if metrics.appointments_last_30 == 0 {
        score += INACTIVE_30_PENALTY;
    } else if metrics.appointments_last_60 == 0 {
        score += INACTIVE_60_PENALTY;
    }

    if metrics.recent_trend < STEEP_DECLINE_TREND {
        score += STEEP_DECLINE_PENALTY;
    } else if metrics.recent_trend < 0 {
        score += MILD_DECLINE_PENALTY;
    }

    if !metrics.has_future_appointments {
        score += NO_FUTURE_PENALTY;
    }

    (score as i64).min(MAX_SCORE)
}
