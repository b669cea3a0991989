use chrono::{NaiveDate, NaiveTime};

use crate::limits::*;
use crate::model::{Reservation, Slot};

use super::error::BookingError;

/// Trim and check the required text fields. Returns the forms to store.
pub(crate) fn validate_fields(
    booked_by: &str,
    purpose: &str,
) -> Result<(String, String), BookingError> {
    let booked_by = booked_by.trim();
    let purpose = purpose.trim();
    if booked_by.is_empty() || purpose.is_empty() {
        return Err(BookingError::MissingFields);
    }
    if booked_by.len() > MAX_NAME_LEN {
        return Err(BookingError::LimitExceeded("name too long"));
    }
    if purpose.len() > MAX_PURPOSE_LEN {
        return Err(BookingError::LimitExceeded("purpose too long"));
    }
    Ok((booked_by.to_owned(), purpose.to_owned()))
}

/// Combine date and times of day into a slot, rejecting empty or inverted ranges.
pub(crate) fn validate_slot(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<Slot, BookingError> {
    if end <= start {
        return Err(BookingError::InvalidInterval);
    }
    Ok(Slot::on_date(date, start, end))
}

/// Linear scan over same-room reservations. Half-open semantics: back-to-back
/// slots (one ending exactly where the other starts) are not a conflict.
pub(crate) fn check_no_conflict(
    reservations: &[Reservation],
    room: &str,
    slot: &Slot,
) -> Result<(), BookingError> {
    for existing in reservations.iter().filter(|r| r.room == room) {
        if slot.overlaps(&existing.slot) {
            return Err(BookingError::Conflict {
                room: existing.room.clone(),
                with: existing.id,
            });
        }
    }
    Ok(())
}
