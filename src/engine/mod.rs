//! The engagement risk pipeline.
//!
//! Data flows one way: appointment history -> metrics -> score, tier and
//! reason -> per-patient [`RiskRecord`] -> ranked list. Every stage is a
//! pure function of its inputs plus the reference date; nothing here mutates
//! the snapshot or retains state between calls.

pub mod metrics;
pub mod ranking;
pub mod reasons;
pub mod scoring;
pub mod thresholds;
pub mod tiers;

pub use metrics::{extract_metrics, PatientMetrics};
pub use ranking::{assess_patient, rank_patients, RiskRecord};
pub use reasons::{reason_summary, risk_reasons, NO_CRITICAL_REASONS};
pub use scoring::risk_score;
pub use tiers::RiskTier;
