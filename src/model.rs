use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open time range `[start, end)` on naive wall-clock time.
///
/// All times are timezone-less; a slot never spans midnight, so its calendar
/// date is derived from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end, "Slot start must be before end");
        Self { start, end }
    }

    /// Combine a calendar date with two times of day.
    pub fn on_date(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self::new(date.and_time(start), date.and_time(end))
    }

    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The calendar date this slot falls on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// An admitted booking. Immutable once created; removed only by a full clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Ulid,
    pub room: String,
    pub booked_by: String,
    pub purpose: String,
    pub slot: Slot,
}

/// A booking attempt as supplied by the input-gathering collaborator.
/// Text fields arrive untrimmed; the desk validates and normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room: String,
    pub booked_by: String,
    pub purpose: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Notification payloads broadcast by the desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Admitted(Reservation),
    Cleared { removed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn slot_overlap() {
        let a = Slot::new(dt("2025-01-10 09:00"), dt("2025-01-10 10:00"));
        let b = Slot::new(dt("2025-01-10 09:30"), dt("2025-01-10 10:30"));
        let c = Slot::new(dt("2025-01-10 10:00"), dt("2025-01-10 11:00"));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // back-to-back, not overlapping
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn slot_contained_and_spanning() {
        let outer = Slot::new(dt("2025-01-10 08:00"), dt("2025-01-10 18:00"));
        let inner = Slot::new(dt("2025-01-10 12:00"), dt("2025-01-10 13:00"));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn slot_date_comes_from_start() {
        let s = Slot::new(dt("2025-01-10 23:00"), dt("2025-01-10 23:59"));
        assert_eq!(s.date(), "2025-01-10".parse().unwrap());
    }

    #[test]
    fn slot_duration() {
        let s = Slot::new(dt("2025-01-10 09:00"), dt("2025-01-10 10:30"));
        assert_eq!(s.duration(), TimeDelta::minutes(90));
    }

    #[test]
    fn reservation_serialization_roundtrip() {
        let r = Reservation {
            id: Ulid::new(),
            room: "VIP Room 1".into(),
            booked_by: "Alice".into(),
            purpose: "Planning".into(),
            slot: Slot::new(dt("2025-01-10 09:00"), dt("2025-01-10 10:00")),
        };
        let json = serde_json::to_string(&r).unwrap();
        let decoded: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(r, decoded);
    }
}
