// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod io;
pub mod report;
pub mod scheduling;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Appointment, AppointmentStatus, Patient, PatientId, PractitionerId};

pub use crate::engine::{
    assess_patient, extract_metrics, rank_patients, reason_summary, risk_score, PatientMetrics,
    RiskRecord, RiskTier,
};

pub use crate::config::ReportOptions;
pub use crate::errors::CaremapError;
pub use crate::report::{
    generate_practice_report, DistributionSlice, FrequencyPoint, PracticeReport, ReportStats,
    RiskAlert,
};
pub use crate::scheduling::{available_slots, DAILY_SLOTS};
pub use crate::store::{PracticeSnapshot, PracticeStore};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
