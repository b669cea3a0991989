use ulid::Ulid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// `booked_by` or `purpose` is blank after trimming.
    MissingFields,
    /// End time is not strictly after start time.
    InvalidInterval,
    /// Room is not in the catalog.
    UnknownRoom(String),
    /// Requested slot overlaps reservation `with` on `room`.
    Conflict { room: String, with: Ulid },
    LimitExceeded(&'static str),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::MissingFields => write!(f, "missing required fields"),
            BookingError::InvalidInterval => write!(f, "end time must be after start time"),
            BookingError::UnknownRoom(name) => write!(f, "unknown room: {name}"),
            BookingError::Conflict { room, .. } => {
                write!(f, "{room} is already booked during that time")
            }
            BookingError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for BookingError {}
