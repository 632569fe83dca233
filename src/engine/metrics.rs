//! Metrics extraction: one patient's appointment history in, a fixed-shape
//! summary out.
//!
//! Everything downstream (scorer, classifier, reason generator) reads only
//! the [`PatientMetrics`] produced here. The extractor takes the reference
//! date as an argument so the whole pipeline stays a pure function of its
//! inputs.

use crate::core::{Appointment, AppointmentStatus};
use crate::engine::thresholds::{
    LONG_WINDOW_DAYS, MID_WINDOW_DAYS, MONTH_LENGTH_DAYS, SHORT_WINDOW_DAYS,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived summary of one patient's appointment history.
///
/// `days_since_last` is signed: when the most recent appointment lies in the
/// future it goes negative and is deliberately not clamped. The rolling
/// window counts use the same signed day difference, so a future-dated
/// appointment lands in all three windows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientMetrics {
    pub total_appointments: usize,
    pub completed_appointments: usize,
    pub canceled_appointments: usize,
    pub scheduled_appointments: usize,
    pub cancellation_rate: f64,
    pub days_since_last: i64,
    pub months_active: f64,
    pub frequency_per_month: f64,
    pub appointments_last_30: usize,
    pub appointments_last_60: usize,
    pub appointments_last_90: usize,
    pub recent_trend: i64,
    pub has_future_appointments: bool,
}

/// Derive [`PatientMetrics`] from a patient's appointments relative to `as_of`.
///
/// Returns `None` for an empty history: such patients are excluded from risk
/// analysis altogether rather than scored on no data. Input order is
/// irrelevant; extremes are computed, not assumed.
pub fn extract_metrics(appointments: &[Appointment], as_of: NaiveDate) -> Option<PatientMetrics> {
    let last = appointments.iter().map(|a| a.date).max()?;
    let first = appointments
        .iter()
        .map(|a| a.date)
        .min()
        .unwrap_or(last);

    let total = appointments.len();
    let mut completed = 0usize;
    let mut canceled = 0usize;
    let mut scheduled = 0usize;
    for appointment in appointments {
        // Rescheduled appointments count toward the total only.
        match appointment.status {
            AppointmentStatus::Completed => completed += 1,
            AppointmentStatus::Canceled => canceled += 1,
            AppointmentStatus::Scheduled => scheduled += 1,
            AppointmentStatus::Rescheduled => {}
        }
    }

    let age_days = |date: NaiveDate| (as_of - date).num_days();

    let appointments_last_30 = appointments
        .iter()
        .filter(|a| age_days(a.date) <= SHORT_WINDOW_DAYS)
        .count();
    let appointments_last_60 = appointments
        .iter()
        .filter(|a| age_days(a.date) <= MID_WINDOW_DAYS)
        .count();
    let appointments_last_90 = appointments
        .iter()
        .filter(|a| age_days(a.date) <= LONG_WINDOW_DAYS)
        .count();

    let cancellation_rate = canceled as f64 / total as f64;

    let months_active = ((as_of - first).num_days() as f64 / MONTH_LENGTH_DAYS).max(1.0);
    let frequency_per_month = completed as f64 / months_active;

    // Completed sessions in the last 30 days against the 31-60 day band; the
    // second window is half-open so day 30 is not counted twice.
    let recent_completed = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed && age_days(a.date) <= SHORT_WINDOW_DAYS)
        .count() as i64;
    let previous_completed = appointments
        .iter()
        .filter(|a| {
            let d = age_days(a.date);
            a.status == AppointmentStatus::Completed && d > SHORT_WINDOW_DAYS && d <= MID_WINDOW_DAYS
        })
        .count() as i64;

    // Status-based, not date-based: a scheduled appointment whose date has
    // already passed still sets the flag.
    let has_future_appointments = scheduled > 0;

    Some(PatientMetrics {
        total_appointments: total,
        completed_appointments: completed,
        canceled_appointments: canceled,
        scheduled_appointments: scheduled,
        cancellation_rate,
        days_since_last: age_days(last),
        months_active,
        frequency_per_month,
        appointments_last_30,
        appointments_last_60,
        appointments_last_90,
        recent_trend: recent_completed - previous_completed,
        has_future_appointments,
    })
}
