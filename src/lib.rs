pub mod limits;
pub mod model;
pub mod notify;
pub mod observability;
pub mod rooms;
pub mod store;

pub use store::{BookingDesk, BookingError};
