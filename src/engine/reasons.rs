//! Human-readable explanation of a patient's risk signals.
//!
//! Works from the same [`PatientMetrics`] as the scorer but evaluates its
//! own clause list; the cutoffs both components share live in
//! [`crate::engine::thresholds`]. Clause order is fixed so the summary text
//! is reproducible.

use crate::engine::metrics::PatientMetrics;
use crate::engine::thresholds::{
    FREQUENT_CANCELLATION_RATE, HIGH_CANCELLATION_RATE, LOW_FREQUENCY_PER_MONTH,
    NOTABLE_ABSENCE_DAYS, PROLONGED_ABSENCE_DAYS, STEEP_DECLINE_TREND,
};

/// Text emitted when no clause fires.
pub const NO_CRITICAL_REASONS: &str = "no critical reasons identified";

/// Collect the clauses that apply to `metrics`, in presentation order.
pub fn risk_reasons(metrics: &PatientMetrics) -> Vec<&'static str> {
    let mut reasons = Vec::new();

    if metrics.days_since_last > PROLONGED_ABSENCE_DAYS {
        reasons.push("absent >45 days");
    } else if metrics.days_since_last > NOTABLE_ABSENCE_DAYS {
        reasons.push("absent >30 days");
    }

    if metrics.cancellation_rate > HIGH_CANCELLATION_RATE {
        reasons.push("high cancellation rate");
    } else if metrics.cancellation_rate > FREQUENT_CANCELLATION_RATE {
        reasons.push("frequent cancellations");
    }

    if metrics.frequency_per_month < LOW_FREQUENCY_PER_MONTH {
        reasons.push("low session frequency");
    }

    if metrics.appointments_last_30 == 0 {
        reasons.push("no sessions in the last month");
    }

    if metrics.recent_trend < STEEP_DECLINE_TREND {
        reasons.push("declining frequency");
    }

    if !metrics.has_future_appointments {
        reasons.push("no future sessions");
    }

    reasons
}

/// Join the applicable clauses into one summary string.
pub fn reason_summary(metrics: &PatientMetrics) -> String {
    let reasons = risk_reasons(metrics);
    if reasons.is_empty() {
        NO_CRITICAL_REASONS.to_string()
    } else {
        reasons.join(", ")
    }
}
