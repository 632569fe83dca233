//! Single home for the engagement scoring weights and thresholds.
//!
//! The scorer and the reason generator are separate components, but several
//! of their cutoffs encode the same business rule. Keeping every literal here
//! stops the two tables drifting apart; `shared_thresholds_stay_aligned`
//! below pins the ones that must agree.

/// Days without contact at which the recency signal saturates.
pub const RECENCY_SATURATION_DAYS: f64 = 60.0;
/// Maximum contribution of the recency signal.
pub const RECENCY_WEIGHT: f64 = 30.0;
/// Weight applied to the cancellation rate.
pub const CANCELLATION_WEIGHT: f64 = 25.0;

/// Completed sessions per month below which frequency is considered low.
pub const LOW_FREQUENCY_PER_MONTH: f64 = 1.0;
/// Completed sessions per month below which frequency is merely reduced.
pub const REDUCED_FREQUENCY_PER_MONTH: f64 = 2.0;
pub const LOW_FREQUENCY_PENALTY: f64 = 20.0;
pub const REDUCED_FREQUENCY_PENALTY: f64 = 10.0;

/// Penalty when no appointment falls in the trailing 30-day window.
pub const INACTIVE_30_PENALTY: f64 = 15.0;
/// Penalty when the 30-day rule did not fire but the 60-day window is empty.
pub const INACTIVE_60_PENALTY: f64 = 10.0;

/// Trend below which the decline is considered steep (strictly less than).
pub const STEEP_DECLINE_TREND: i64 = -1;
pub const STEEP_DECLINE_PENALTY: f64 = 10.0;
pub const MILD_DECLINE_PENALTY: f64 = 5.0;

/// Penalty when the patient holds no scheduled appointment at all.
pub const NO_FUTURE_PENALTY: f64 = 5.0;

/// Upper bound of the risk score; the sum is capped, never floored.
pub const MAX_SCORE: i64 = 100;

/// Tier cutoffs, inclusive on the lower bound of each tier.
pub const HIGH_TIER_CUTOFF: i64 = 70;
pub const MODERATE_TIER_CUTOFF: i64 = 40;

/// Days of absence that make the "absent >45 days" clause fire.
pub const PROLONGED_ABSENCE_DAYS: i64 = 45;
/// Days of absence that make the "absent >30 days" clause fire.
pub const NOTABLE_ABSENCE_DAYS: i64 = 30;
/// Cancellation rate above which the rate is called high.
pub const HIGH_CANCELLATION_RATE: f64 = 0.3;
/// Cancellation rate above which cancellations are called frequent.
pub const FREQUENT_CANCELLATION_RATE: f64 = 0.2;

/// Nominal month length used when deriving `months_active`.
pub const MONTH_LENGTH_DAYS: f64 = 30.0;

/// Rolling activity windows, in days, inclusive and overlapping.
pub const SHORT_WINDOW_DAYS: i64 = 30;
pub const MID_WINDOW_DAYS: i64 = 60;
pub const LONG_WINDOW_DAYS: i64 = 90;
