//! Conflict detection and availability derivation for a single room.
//!
//! All interval logic goes through one overlap predicate on half-open
//! `[start, end)` ranges: appointments that merely touch at an endpoint do
//! not conflict. The same predicate drives both the create-time conflict
//! scan and the availability grid.

use chrono::{Duration, NaiveTime, Timelike};

use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::{Appointment, CreateAppointmentRequest};
use crate::models::availability::{SlotConflict, SlotStatus};

/// Start of the bookable daily window.
pub const DAY_OPEN: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(t) => t,
    None => panic!("invalid window open time"),
};

/// End of the bookable daily window (exclusive).
pub const DAY_CLOSE: NaiveTime = match NaiveTime::from_hms_opt(20, 0, 0) {
    Some(t) => t,
    None => panic!("invalid window close time"),
};

/// Length of one availability slot.
pub const SLOT_MINUTES: i64 = 30;

fn minutes_since_midnight(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Returns true iff the half-open intervals `[s1, e1)` and `[s2, e2)`
/// overlap. Strict inequality on both sides: an appointment ending exactly
/// when another begins is not a conflict.
pub fn overlaps(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    minutes_since_midnight(s1) < minutes_since_midnight(e2)
        && minutes_since_midnight(s2) < minutes_since_midnight(e1)
}

/// Scans `existing` in order and returns the first appointment whose
/// interval overlaps `[start, end)`, if any.
pub fn find_conflict<'a>(
    start: NaiveTime,
    end: NaiveTime,
    existing: &'a [Appointment],
) -> Option<&'a Appointment> {
    existing
        .iter()
        .find(|a| overlaps(start, end, a.start_time, a.end_time))
}

/// Validates a create request against the booking rules: a well-ordered
/// time range and non-empty name and title.
pub fn validate_request(request: &CreateAppointmentRequest) -> BookingResult<()> {
    if request.name.trim().is_empty() {
        return Err(BookingError::Validation("name must not be empty".to_string()));
    }
    if request.title.trim().is_empty() {
        return Err(BookingError::Validation("title must not be empty".to_string()));
    }
    if request.start_time >= request.end_time {
        return Err(BookingError::Validation(
            "start_time must be before end_time".to_string(),
        ));
    }
    Ok(())
}

/// Derives the availability grid for one day's appointments.
///
/// The 08:00-20:00 window is partitioned into consecutive half-open slots of
/// [`SLOT_MINUTES`] starting at 08:00; the final slot is clipped so it never
/// extends past close. Each slot is tested against the appointments in order
/// and reports the first blocker found.
pub fn build_availability(appointments: &[Appointment]) -> Vec<SlotStatus> {
    let mut slots = Vec::new();
    let mut cursor = DAY_OPEN;

    while cursor < DAY_CLOSE {
        let slot_end = std::cmp::min(cursor + Duration::minutes(SLOT_MINUTES), DAY_CLOSE);

        let blocker = find_conflict(cursor, slot_end, appointments);
        slots.push(SlotStatus {
            start_time: cursor,
            end_time: slot_end,
            available: blocker.is_none(),
            appointment: blocker.map(|a| SlotConflict {
                title: a.title.clone(),
                name: a.name.clone(),
                start_time: a.start_time,
                end_time: a.end_time,
            }),
        });

        cursor = slot_end;
    }

    slots
}
