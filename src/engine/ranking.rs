//! Per-practitioner risk ranking.
//!
//! Runs the extractor, scorer, classifier and reason generator over every
//! patient of a practitioner and returns the records sorted by descending
//! score. Each patient's computation touches only that patient's slice of
//! the snapshot, so the loop is parallelized with rayon; the sort is stable,
//! so equal scores keep the upstream patient order.

use crate::core::{Appointment, Patient, PatientId, PractitionerId};
use crate::engine::metrics::{extract_metrics, PatientMetrics};
use crate::engine::reasons::reason_summary;
use crate::engine::scoring::risk_score;
use crate::engine::tiers::RiskTier;
use crate::store::PracticeStore;
use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Risk assessment for one patient, assembled fresh per request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub patient_id: PatientId,
    pub patient: String,
    pub tier: RiskTier,
    pub score: i64,
    pub reason: String,
    pub last_appointment: Option<NaiveDate>,
    pub metrics: PatientMetrics,
}

/// Score a single patient from their appointment history.
///
/// Returns `None` when the history is empty; such patients are excluded
/// from the ranking rather than reported at zero.
pub fn assess_patient(
    patient: &Patient,
    appointments: &[Appointment],
    as_of: NaiveDate,
) -> Option<RiskRecord> {
    let metrics = extract_metrics(appointments, as_of)?;
    let score = risk_score(&metrics);
    let tier = RiskTier::from_score(score);
    let reason = reason_summary(&metrics);
    let last_appointment = appointments.iter().map(|a| a.date).max();

    debug!(
        "patient {} scored {} ({})",
        patient.id,
        score,
        tier.label()
    );

    Some(RiskRecord {
        patient_id: patient.id,
        patient: patient.name.clone(),
        tier,
        score,
        reason,
        last_appointment,
        metrics,
    })
}

/// Rank all of a practitioner's patients by engagement risk, highest first.
pub fn rank_patients(
    store: &dyn PracticeStore,
    practitioner: PractitionerId,
    as_of: NaiveDate,
) -> Vec<RiskRecord> {
    let patients = store.patients_for(practitioner);

    let mut records: Vec<RiskRecord> = patients
        .par_iter()
        .filter_map(|patient| {
            let appointments = store.appointments_for_patient(practitioner, patient.id);
            assess_patient(patient, &appointments, as_of)
        })
        .collect();

    // Stable: equal scores keep the upstream patient order.
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}
