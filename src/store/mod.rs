mod conflict;
mod error;
mod state;

pub use error::BookingError;
pub use state::StoreState;

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::model::{BookingRequest, Event, Reservation};
use crate::notify::NotifyHub;
use crate::observability;
use crate::rooms::Catalog;

use conflict::{check_no_conflict, validate_fields, validate_slot};

/// Front desk for one reservation store. All mutation goes through here, under
/// a single write lock, so the conflict check and the append are observed
/// atomically by every other caller: two overlapping bookings for the same
/// room can never both be admitted.
pub struct BookingDesk {
    catalog: Catalog,
    state: RwLock<StoreState>,
    notify: Arc<NotifyHub>,
}

impl BookingDesk {
    pub fn new(catalog: Catalog, notify: Arc<NotifyHub>) -> Self {
        Self {
            catalog,
            state: RwLock::new(StoreState::new()),
            notify,
        }
    }

    /// A desk over the built-in six-room catalog.
    pub fn with_builtin_rooms() -> Self {
        Self::new(Catalog::builtin(), Arc::new(NotifyHub::new()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notify(&self) -> &Arc<NotifyHub> {
        &self.notify
    }

    /// Validate a booking request and, if the room is free, admit it.
    ///
    /// Checks run in order and the first failure wins; on any failure the
    /// store is untouched. On success the store grows by exactly one
    /// reservation and room subscribers are notified.
    pub async fn try_book(&self, request: BookingRequest) -> Result<Reservation, BookingError> {
        let result = self.admit(request).await;
        match &result {
            Ok(reservation) => {
                metrics::counter!(observability::BOOKINGS_TOTAL, "status" => "admitted")
                    .increment(1);
                tracing::info!(
                    room = %reservation.room,
                    booked_by = %reservation.booked_by,
                    start = %reservation.slot.start,
                    end = %reservation.slot.end,
                    "reservation admitted"
                );
            }
            Err(e) => {
                metrics::counter!(observability::BOOKINGS_TOTAL, "status" => "rejected")
                    .increment(1);
                if matches!(e, BookingError::Conflict { .. }) {
                    metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
                }
                tracing::warn!(error = %e, "booking rejected");
            }
        }
        result
    }

    async fn admit(&self, request: BookingRequest) -> Result<Reservation, BookingError> {
        let (booked_by, purpose) = validate_fields(&request.booked_by, &request.purpose)?;
        let slot = validate_slot(request.date, request.start, request.end)?;
        if !self.catalog.contains(&request.room) {
            return Err(BookingError::UnknownRoom(request.room));
        }

        let mut state = self.state.write().await;
        if state.len() >= crate::limits::MAX_RESERVATIONS {
            return Err(BookingError::LimitExceeded("too many reservations"));
        }
        check_no_conflict(state.all(), &request.room, &slot)?;

        let reservation = Reservation {
            id: Ulid::new(),
            room: request.room,
            booked_by,
            purpose,
            slot,
        };
        state.push(reservation.clone());
        metrics::gauge!(observability::RESERVATIONS_ACTIVE).increment(1.0);
        self.notify
            .send(&reservation.room, &Event::Admitted(reservation.clone()));
        Ok(reservation)
    }

    /// Reservations on `date`, ascending by start time (ties keep insertion
    /// order). Pure read; empty vec when nothing matches.
    pub async fn list_by_date(&self, date: NaiveDate) -> Vec<Reservation> {
        metrics::counter!(observability::LIST_QUERIES_TOTAL).increment(1);
        self.state.read().await.list_by_date(date)
    }

    /// Unconditionally empty the store. Administrative affordance; returns
    /// how many reservations were dropped.
    pub async fn clear_all(&self) -> usize {
        let removed = self.state.write().await.clear();
        metrics::counter!(observability::STORE_CLEARS_TOTAL).increment(1);
        metrics::gauge!(observability::RESERVATIONS_ACTIVE).set(0.0);
        tracing::info!(removed, "store cleared");
        self.notify.broadcast(&Event::Cleared { removed });
        removed
    }

    pub async fn reservation_count(&self) -> usize {
        self.state.read().await.len()
    }
}
