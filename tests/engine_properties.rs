//! Property tests for the scoring pipeline.

use caremap::{reason_summary, risk_score, PatientMetrics, RiskTier};
use proptest::prelude::*;

/// Metrics with a non-negative `days_since_last` and nested activity
/// windows, the shape every past-dated history produces.
fn arb_metrics() -> impl Strategy<Value = PatientMetrics> {
    (
        0i64..730,
        0.0f64..=1.0,
        0.0f64..10.0,
        0usize..20,
        0usize..20,
        -10i64..10,
        any::<bool>(),
    )
        .prop_map(
            |(days, rate, freq, last_30, extra_60, trend, future)| PatientMetrics {
                total_appointments: 20,
                completed_appointments: 10,
                canceled_appointments: 5,
                scheduled_appointments: 2,
                cancellation_rate: rate,
                days_since_last: days,
                months_active: 3.0,
                frequency_per_month: freq,
                appointments_last_30: last_30,
                appointments_last_60: last_30 + extra_60,
                appointments_last_90: last_30 + extra_60,
                recent_trend: trend,
                has_future_appointments: future,
            },
        )
}

proptest! {
    #[test]
    fn score_stays_within_bounds(metrics in arb_metrics()) {
        let score = risk_score(&metrics);
        prop_assert!((0..=100).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn score_tier_and_reason_are_deterministic(metrics in arb_metrics()) {
        let copy = metrics.clone();
        prop_assert_eq!(risk_score(&metrics), risk_score(&copy));
        prop_assert_eq!(
            RiskTier::from_score(risk_score(&metrics)),
            RiskTier::from_score(risk_score(&copy))
        );
        prop_assert_eq!(reason_summary(&metrics), reason_summary(&copy));
    }

    #[test]
    fn classifier_is_monotone_in_the_score(a in 0i64..=100, b in 0i64..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RiskTier::from_score(low) <= RiskTier::from_score(high));
    }
}
