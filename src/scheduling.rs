//! Domain constants for the daily schedule and slot availability.

use crate::core::{AppointmentStatus, PractitionerId};
use crate::store::PracticeStore;
use chrono::NaiveDate;
use std::collections::HashSet;

/// The seven bookable slots of a clinic day. The scheduling surface treats
/// these labels as the canonical slot identifiers.
pub const DAILY_SLOTS: [&str; 7] = [
    "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00",
];

/// Slots still open for `practitioner` on `date`.
///
/// Only appointments with scheduled status block a slot; canceled, completed
/// and rescheduled ones leave it bookable. Times that match no known slot
/// label are ignored.
pub fn available_slots(
    store: &dyn PracticeStore,
    practitioner: PractitionerId,
    date: NaiveDate,
) -> Vec<&'static str> {
    let occupied: HashSet<String> = store
        .appointments_for_practitioner(practitioner)
        .into_iter()
        .filter(|a| a.date == date && a.status == AppointmentStatus::Scheduled)
        .filter_map(|a| a.time)
        .collect();

    DAILY_SLOTS
        .iter()
        .copied()
        .filter(|slot| !occupied.contains(*slot))
        .collect()
}
