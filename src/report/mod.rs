//! Practice-wide report aggregation.
//!
//! Combines raw appointment and patient counts with the risk ranking into
//! the structure the reporting surface consumes. Built fresh per request,
//! never cached.

use crate::config::ReportOptions;
use crate::core::{AppointmentStatus, PatientId, PractitionerId};
use crate::engine::ranking::rank_patients;
use crate::engine::tiers::RiskTier;
use crate::store::PracticeStore;
use chrono::{Datelike, NaiveDate};
use im::Vector;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display-color tokens the reporting surface keys its charts on.
const COMPLETED_COLOR: &str = "#26B0BF";
const CANCELED_COLOR: &str = "#EF4444";
const SCHEDULED_COLOR: &str = "#10B981";

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Headline figures of the practice report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub active_patients: usize,
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub attendance_rate: f64,
}

/// Completed-session count for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    pub month: String,
    pub sessions: usize,
}

/// One labeled slice of a status or patient distribution chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: usize,
    pub color: String,
}

/// A risk record surfaced in the report's alert feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub id: PatientId,
    pub patient: String,
    pub risk: RiskTier,
    pub reason: String,
    pub date: NaiveDate,
}

/// The practice-wide report consumed by the reporting surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PracticeReport {
    pub stats: ReportStats,
    pub frequency_data: Vector<FrequencyPoint>,
    pub status_data: Vector<DistributionSlice>,
    pub patient_data: Vector<DistributionSlice>,
    pub risk_alerts: Vector<RiskAlert>,
}

/// Build the full practice report for one practitioner.
///
/// The monthly frequency series is a genuine month-bucketed count of
/// completed sessions over the twelve calendar months of the `as_of` year,
/// replacing the placeholder series of earlier report tooling.
pub fn generate_practice_report(
    store: &dyn PracticeStore,
    practitioner: PractitionerId,
    as_of: NaiveDate,
    options: &ReportOptions,
) -> PracticeReport {
    let appointments = store.appointments_for_practitioner(practitioner);
    let patients = store.patients_for(practitioner);

    let total_sessions = appointments.len();
    let completed_sessions = count_status(&appointments, AppointmentStatus::Completed);
    let canceled_sessions = count_status(&appointments, AppointmentStatus::Canceled);
    let scheduled_sessions = count_status(&appointments, AppointmentStatus::Scheduled);

    let attendance_rate = attendance_rate(completed_sessions, total_sessions);

    let with_history: HashSet<PatientId> = appointments.iter().map(|a| a.patient_id).collect();
    let patients_without_sessions = patients
        .iter()
        .filter(|p| !with_history.contains(&p.id))
        .count();
    let patients_with_sessions = patients.len() - patients_without_sessions;

    let ranked = rank_patients(store, practitioner, as_of);
    let risk_alerts: Vector<RiskAlert> = ranked
        .into_iter()
        .filter(|record| record.tier.is_alertable())
        .take(options.max_alerts)
        .map(|record| RiskAlert {
            id: record.patient_id,
            patient: record.patient,
            risk: record.tier,
            reason: record.reason,
            date: record.last_appointment.unwrap_or(as_of),
        })
        .collect();

    let frequency_data = monthly_completed_sessions(&appointments, as_of.year());

    let mut status_data = Vector::new();
    if completed_sessions > 0 {
        status_data.push_back(slice("Completed", completed_sessions, COMPLETED_COLOR));
    }
    if canceled_sessions > 0 {
        status_data.push_back(slice("Canceled", canceled_sessions, CANCELED_COLOR));
    }
    if scheduled_sessions > 0 {
        status_data.push_back(slice("Scheduled", scheduled_sessions, SCHEDULED_COLOR));
    }

    let mut patient_data = Vector::new();
    if patients_with_sessions > 0 {
        patient_data.push_back(slice("With sessions", patients_with_sessions, COMPLETED_COLOR));
    }
    if patients_without_sessions > 0 {
        patient_data.push_back(slice("No sessions", patients_without_sessions, CANCELED_COLOR));
    }

    info!(
        "practice report for practitioner {}: {} sessions, {} alerts",
        practitioner,
        total_sessions,
        risk_alerts.len()
    );

    PracticeReport {
        stats: ReportStats {
            active_patients: patients.len(),
            total_sessions,
            completed_sessions,
            attendance_rate,
        },
        frequency_data,
        status_data,
        patient_data,
        risk_alerts,
    }
}

fn count_status(appointments: &[crate::core::Appointment], status: AppointmentStatus) -> usize {
    appointments.iter().filter(|a| a.status == status).count()
}

/// Completed / total as a percentage, rounded to 2 decimals, 0.0 on empty.
fn attendance_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(completed as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn monthly_completed_sessions(
    appointments: &[crate::core::Appointment],
    year: i32,
) -> Vector<FrequencyPoint> {
    let mut buckets = [0usize; 12];
    for appointment in appointments {
        if appointment.status == AppointmentStatus::Completed && appointment.date.year() == year {
            buckets[appointment.date.month0() as usize] += 1;
        }
    }
    MONTH_LABELS
        .iter()
        .zip(buckets)
        .map(|(label, sessions)| FrequencyPoint {
            month: (*label).to_string(),
            sessions,
        })
        .collect()
}

fn slice(name: &str, value: usize, color: &str) -> DistributionSlice {
    DistributionSlice {
        name: name.to_string(),
        value,
        color: color.to_string(),
    }
}
