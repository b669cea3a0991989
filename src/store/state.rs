use chrono::NaiveDate;

use crate::model::Reservation;

/// The ordered reservation sequence. Insertion order is preserved; the
/// same-room overlap invariant is enforced by the desk before anything is
/// pushed here.
#[derive(Debug, Default)]
pub struct StoreState {
    reservations: Vec<Reservation>,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn all(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn push(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Reservations whose start falls on `date`, ascending by start time.
    /// The sort is stable, so equal starts keep insertion order.
    pub fn list_by_date(&self, date: NaiveDate) -> Vec<Reservation> {
        let mut out: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.slot.date() == date)
            .cloned()
            .collect();
        out.sort_by_key(|r| r.slot.start);
        out
    }

    /// Drop every reservation. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.reservations.len();
        self.reservations.clear();
        removed
    }
}
