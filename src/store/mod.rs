//! Read-only snapshot access, the engine's inbound data contract.
//!
//! The persistence collaborator hands the engine an immutable snapshot of
//! patients and appointments. [`PracticeStore`] is that contract; the engine
//! never assumes sort order and never mutates what it is given.
//! [`PracticeSnapshot`] is the in-memory implementation the CLI loads from a
//! JSON file — a malformed record there (an unparseable date, an unknown
//! status) fails the whole load rather than being skipped.

use crate::core::{Appointment, Patient, PatientId, PractitionerId};
use crate::errors::CaremapError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Read-only access to one practice's patients and appointments.
///
/// `Sync` because the ranker fans the per-patient work out across rayon
/// workers, each reading its own slice of the snapshot.
pub trait PracticeStore: Sync {
    /// Patients owned by `practitioner`, in storage order.
    fn patients_for(&self, practitioner: PractitionerId) -> Vec<Patient>;

    /// All appointments of one patient under `practitioner`.
    fn appointments_for_patient(
        &self,
        practitioner: PractitionerId,
        patient: PatientId,
    ) -> Vec<Appointment>;

    /// Every appointment of `practitioner`, across all patients.
    fn appointments_for_practitioner(&self, practitioner: PractitionerId) -> Vec<Appointment>;
}

/// In-memory practice snapshot, deserializable from JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeSnapshot {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl PracticeSnapshot {
    pub fn from_json(json: &str) -> Result<Self, CaremapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, CaremapError> {
        let contents = fs::read_to_string(path).map_err(|source| CaremapError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CaremapError::SnapshotParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl PracticeStore for PracticeSnapshot {
    fn patients_for(&self, practitioner: PractitionerId) -> Vec<Patient> {
        self.patients
            .iter()
            .filter(|p| p.practitioner_id == practitioner)
            .cloned()
            .collect()
    }

    fn appointments_for_patient(
        &self,
        practitioner: PractitionerId,
        patient: PatientId,
    ) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.practitioner_id == practitioner && a.patient_id == patient)
            .cloned()
            .collect()
    }

    fn appointments_for_practitioner(&self, practitioner: PractitionerId) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.practitioner_id == practitioner)
            .cloned()
            .collect()
    }
}
